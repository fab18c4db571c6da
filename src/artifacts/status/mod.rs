//! Status report
//!
//! Computes the five sections of the `status` command from snapshots of
//! the repository state: branch list, staged additions, staged removals,
//! modifications not staged for commit, and untracked files. All sections
//! come out sorted so the report is stable across runs.

use crate::areas::staging::{Addition, Removal};
use crate::artifacts::objects::commit::Tree;
use crate::artifacts::objects::fingerprint::Fingerprint;
use std::collections::BTreeMap;

/// Working tree snapshot: file name -> fingerprint of current contents
pub type WorkingTree = BTreeMap<String, Fingerprint>;

/// The five sections of the status report, each sorted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReport {
    /// All branch names, current first marker applied by the renderer
    pub branches: Vec<String>,
    /// Files staged for addition
    pub staged: Vec<String>,
    /// Files staged for removal
    pub removed: Vec<String>,
    /// Working files whose contents diverge from what is staged/tracked
    pub modified: Vec<String>,
    /// Tracked or staged files missing from the working tree
    pub deleted: Vec<String>,
    /// Working files neither staged nor tracked
    pub untracked: Vec<String>,
}

impl StatusReport {
    /// Build the report from state snapshots
    ///
    /// A working file counts as modified when it is staged for addition
    /// with different contents, or tracked with different contents and
    /// not staged. It counts as deleted when it is tracked but missing and
    /// not staged for removal, or staged for addition but missing.
    pub fn collect(
        branches: Vec<String>,
        tracked: &Tree,
        addition: &Addition,
        removal: &Removal,
        working: &WorkingTree,
    ) -> Self {
        let mut report = StatusReport {
            branches,
            staged: addition.keys().cloned().collect(),
            removed: removal.iter().cloned().collect(),
            ..Default::default()
        };

        for (file_name, fingerprint) in working {
            match addition.get(file_name) {
                Some(staged_fingerprint) if staged_fingerprint != fingerprint => {
                    report.modified.push(file_name.clone());
                }
                Some(_) => {}
                None => {
                    let tracked_with_other_contents = tracked
                        .get(file_name)
                        .map(|tracked_fingerprint| tracked_fingerprint != fingerprint)
                        .unwrap_or(false);
                    if tracked_with_other_contents {
                        report.modified.push(file_name.clone());
                    }
                }
            }
        }

        for file_name in tracked.keys() {
            if !working.contains_key(file_name) && !removal.contains(file_name) {
                report.deleted.push(file_name.clone());
            }
        }
        for file_name in addition.keys() {
            if !working.contains_key(file_name) && !report.deleted.contains(file_name) {
                report.deleted.push(file_name.clone());
            }
        }
        report.deleted.sort();

        for file_name in working.keys() {
            if !addition.contains_key(file_name) && !tracked.contains_key(file_name) {
                report.untracked.push(file_name.clone());
            }
        }

        report
    }
}
