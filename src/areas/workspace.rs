//! Working tree adapter
//!
//! The working tree is the flat set of plain files in the repository root
//! at call time, read fresh on every invocation. Subdirectories (including
//! `.gitlet` itself) are ignored entirely.

use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 1] = [".gitlet"];

/// Flat working directory
#[derive(Debug, new)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// List the names of plain files in the working directory
    ///
    /// Sorted; directories and the repository directory are skipped.
    pub fn list_files(&self) -> anyhow::Result<BTreeSet<String>> {
        Ok(WalkDir::new(self.path.as_ref())
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .filter(|name| !IGNORED_PATHS.contains(&name.as_str()))
            .collect())
    }

    pub fn exists(&self, file_name: &str) -> bool {
        // the working tree is flat: a name that points into a
        // subdirectory is not a working file
        if file_name.contains(['/', '\\']) {
            return false;
        }
        self.path.join(file_name).is_file()
    }

    pub fn read(&self, file_name: &str) -> anyhow::Result<Bytes> {
        let file_path = self.path.join(file_name);

        let contents = std::fs::read(&file_path)
            .with_context(|| format!("Unable to read working file {}", file_path.display()))?;

        Ok(contents.into())
    }

    pub fn write(&self, file_name: &str, contents: &[u8]) -> anyhow::Result<()> {
        let file_path = self.path.join(file_name);

        std::fs::write(&file_path, contents)
            .with_context(|| format!("Unable to write working file {}", file_path.display()))
    }

    /// Delete a working file; deleting an absent file is a no-op
    pub fn delete(&self, file_name: &str) -> anyhow::Result<()> {
        let file_path = self.path.join(file_name);

        if !file_path.exists() {
            return Ok(());
        }

        std::fs::remove_file(&file_path)
            .with_context(|| format!("Unable to delete working file {}", file_path.display()))
    }
}
