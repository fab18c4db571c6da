//! Branches and HEAD
//!
//! Branches are named mutable pointers to commit fingerprints, stored one
//! per text file under `.gitlet/branches/`. HEAD is a single text file
//! holding the name of the current branch; it always points at a branch,
//! never directly at a commit.
//!
//! Ref writes take an advisory exclusive lock. Concurrent invocations on
//! one repository remain undefined behavior.

use crate::artifacts::objects::fingerprint::Fingerprint;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Branches directory name
const BRANCHES_DIR: &str = "branches";

/// Name of the HEAD file
const HEAD_FILE: &str = "HEAD";

/// Name of the branch created by init
pub const DEFAULT_BRANCH: &str = "master";

/// Branch and HEAD manager
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository directory (typically `.gitlet`)
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> PathBuf {
        self.path.join(HEAD_FILE)
    }

    pub fn branches_path(&self) -> PathBuf {
        self.path.join(BRANCHES_DIR)
    }

    /// Read the name of the current branch from HEAD
    pub fn read_head(&self) -> anyhow::Result<String> {
        let name = std::fs::read_to_string(self.head_path())
            .context("Unable to read the HEAD file")?;
        Ok(name.trim().to_string())
    }

    /// Point HEAD at the given branch name
    pub fn write_head(&self, branch_name: &str) -> anyhow::Result<()> {
        self.write_ref_file(self.head_path(), branch_name)
    }

    pub fn branch_exists(&self, branch_name: &str) -> bool {
        !branch_name.is_empty() && self.branches_path().join(branch_name).exists()
    }

    /// Read the commit fingerprint a branch points to
    pub fn read_branch(&self, branch_name: &str) -> anyhow::Result<Option<Fingerprint>> {
        if !self.branch_exists(branch_name) {
            return Ok(None);
        }

        let branch_path = self.branches_path().join(branch_name);
        let contents = std::fs::read_to_string(&branch_path).with_context(|| {
            format!("Unable to read branch file {}", branch_path.display())
        })?;

        Ok(Some(Fingerprint::try_parse(contents.trim().to_string())?))
    }

    /// Point a branch at the given commit, creating the branch if absent
    pub fn write_branch(
        &self,
        branch_name: &str,
        fingerprint: &Fingerprint,
    ) -> anyhow::Result<()> {
        self.write_ref_file(
            self.branches_path().join(branch_name),
            fingerprint.as_ref(),
        )
    }

    /// Delete a branch pointer
    ///
    /// Only the pointer goes away; the commits it pointed to stay in the
    /// store.
    pub fn delete_branch(&self, branch_name: &str) -> anyhow::Result<()> {
        let branch_path = self.branches_path().join(branch_name);

        std::fs::remove_file(&branch_path).with_context(|| {
            format!("Unable to delete branch file {}", branch_path.display())
        })
    }

    /// List every branch name, sorted lexicographically
    pub fn list_branches(&self) -> anyhow::Result<Vec<String>> {
        let mut names = WalkDir::new(self.branches_path())
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .collect::<Vec<_>>();

        names.sort();
        Ok(names)
    }

    fn write_ref_file(&self, path: PathBuf, contents: &str) -> anyhow::Result<()> {
        // open the ref file as WRONLY and CREAT to overwrite the pointer
        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("failed to open ref file at {:?}", path))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(contents.as_bytes())?;

        Ok(())
    }
}
