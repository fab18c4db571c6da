//! Merge planning
//!
//! A three-way merge compares the trees of the split point (`S`), the
//! current head (`C`) and the other head (`O`), classifies every file by
//! what each side did to it since the split, and produces a plan of
//! additions (taken from the other side), removals, and conflicts. The
//! plan is computed before any mutation so the untracked-overwrite guard
//! can run against the complete set of files the merge would touch.

use crate::artifacts::objects::commit::Tree;
use bytes::{BufMut, Bytes, BytesMut};
use std::collections::BTreeSet;

/// Outcome of merge planning
///
/// `additions` map file names to the other side's blob; `removals` and
/// `conflicts` are file name sets. The three sets are disjoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergePlan {
    pub additions: Tree,
    pub removals: BTreeSet<String>,
    pub conflicts: BTreeSet<String>,
}

impl MergePlan {
    /// Every file the merge would write or delete
    pub fn touched_files(&self) -> BTreeSet<String> {
        self.additions
            .keys()
            .chain(self.removals.iter())
            .chain(self.conflicts.iter())
            .cloned()
            .collect()
    }
}

/// Classify every file relative to the split tree and build the plan
///
/// Per-file categories relative to `split`:
/// - removed on a side: present at the split, absent from that side
/// - added on a side: absent at the split, present on that side
/// - modified on a side: present in both with a different fingerprint
///
/// Files the other side removed are planned for removal unless the
/// current side modified them (conflict) or removed them too (nothing to
/// do). Files the other side added or modified are taken from the other
/// side unless the current side touched them divergently, in which case
/// they conflict; identical changes on both sides need no action.
pub fn plan(split: &Tree, current: &Tree, other: &Tree) -> MergePlan {
    let current_removed = removed_since(current, split);
    let other_removed = removed_since(other, split);
    let current_added = added_since(current, split);
    let other_added = added_since(other, split);
    let current_modified = modified_since(current, split);
    let other_modified = modified_since(other, split);

    let mut merge_plan = MergePlan::default();

    for file_name in &other_removed {
        if current_modified.contains(file_name) {
            merge_plan.conflicts.insert(file_name.clone());
        } else if !current_removed.contains(file_name) {
            merge_plan.removals.insert(file_name.clone());
        }
    }

    for file_name in &other_added {
        if !current_added.contains(file_name) {
            merge_plan
                .additions
                .insert(file_name.clone(), other[file_name].clone());
        } else if current[file_name] != other[file_name] {
            merge_plan.conflicts.insert(file_name.clone());
        }
    }

    for file_name in &other_modified {
        if current_removed.contains(file_name) {
            merge_plan.conflicts.insert(file_name.clone());
        } else if !current_modified.contains(file_name) {
            merge_plan
                .additions
                .insert(file_name.clone(), other[file_name].clone());
        } else if current[file_name] != other[file_name] {
            merge_plan.conflicts.insert(file_name.clone());
        }
    }

    merge_plan
}

/// Compose the working-file contents for a conflicted file
///
/// Frames the current side's contents and the other side's contents with
/// the standard conflict markers; a side absent from its tree contributes
/// nothing between its markers.
pub fn compose_conflict(current: Option<&[u8]>, other: Option<&[u8]>) -> Bytes {
    let mut contents = BytesMut::new();

    contents.put_slice(b"<<<<<<< HEAD\n");
    if let Some(current) = current {
        contents.put_slice(current);
    }
    contents.put_slice(b"=======\n");
    if let Some(other) = other {
        contents.put_slice(other);
    }
    contents.put_slice(b">>>>>>>\n");

    contents.freeze()
}

fn removed_since(side: &Tree, split: &Tree) -> BTreeSet<String> {
    split
        .keys()
        .filter(|name| !side.contains_key(*name))
        .cloned()
        .collect()
}

fn added_since(side: &Tree, split: &Tree) -> BTreeSet<String> {
    side.keys()
        .filter(|name| !split.contains_key(*name))
        .cloned()
        .collect()
}

fn modified_since(side: &Tree, split: &Tree) -> BTreeSet<String> {
    side.iter()
        .filter(|(name, fingerprint)| {
            split
                .get(*name)
                .map(|split_fingerprint| split_fingerprint != *fingerprint)
                .unwrap_or(false)
        })
        .map(|(name, _)| name.clone())
        .collect()
}
