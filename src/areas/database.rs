//! Object database: blob and commit stores
//!
//! Two content-addressed stores on disk. Blobs hold raw file bytes and
//! commits hold canonically serialized commit records; both are keyed by
//! the fingerprint of exactly the bytes written, so `hash(read(fp)) == fp`
//! holds for every stored file.
//!
//! ## Storage Format
//!
//! - Blobs: `.gitlet/blobs/<40-hex>` (raw contents)
//! - Commits: `.gitlet/commits/<40-hex>` (serialized record)
//!
//! Objects are immutable: writing an existing fingerprint is a no-op, and
//! nothing ever deletes one.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::fingerprint::Fingerprint;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Blob store directory name
const BLOBS_DIR: &str = "blobs";

/// Commit store directory name
const COMMITS_DIR: &str = "commits";

/// Content-addressed object database
///
/// Rooted at the repository directory (`.gitlet`); owns the `blobs/` and
/// `commits/` stores underneath it.
#[derive(Debug, new)]
pub struct Database {
    /// Path to the repository directory (typically `.gitlet`)
    path: Box<Path>,
}

impl Database {
    pub fn blobs_path(&self) -> PathBuf {
        self.path.join(BLOBS_DIR)
    }

    pub fn commits_path(&self) -> PathBuf {
        self.path.join(COMMITS_DIR)
    }

    /// Store a blob, returning its fingerprint
    ///
    /// Idempotent: if the fingerprint already exists the write is skipped
    /// and the existing contents are treated as equal.
    pub fn put_blob(&self, blob: &Blob) -> anyhow::Result<Fingerprint> {
        let fingerprint = blob.fingerprint()?;
        self.write_object(self.blobs_path(), &fingerprint, blob.serialize()?)?;
        Ok(fingerprint)
    }

    /// Load a blob by fingerprint
    pub fn blob(&self, fingerprint: &Fingerprint) -> anyhow::Result<Option<Blob>> {
        match self.read_object(self.blobs_path(), fingerprint)? {
            Some(bytes) => Ok(Some(Blob::deserialize(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Load a blob that a tracked tree refers to
    ///
    /// A tree entry pointing at a missing blob is a dangling reference,
    /// which is a programmer error rather than a user-visible one.
    pub fn require_blob(&self, fingerprint: &Fingerprint) -> anyhow::Result<Blob> {
        self.blob(fingerprint)?
            .with_context(|| format!("dangling blob reference {}", fingerprint))
    }

    pub fn blob_exists(&self, fingerprint: &Fingerprint) -> bool {
        self.blobs_path().join(fingerprint.as_ref()).exists()
    }

    /// Store a commit, returning its fingerprint
    pub fn put_commit(&self, commit: &Commit) -> anyhow::Result<Fingerprint> {
        let fingerprint = commit.fingerprint()?;
        self.write_object(self.commits_path(), &fingerprint, commit.serialize()?)?;
        Ok(fingerprint)
    }

    /// Load a commit by fingerprint
    pub fn commit(&self, fingerprint: &Fingerprint) -> anyhow::Result<Option<Commit>> {
        match self.read_object(self.commits_path(), fingerprint)? {
            Some(bytes) => Ok(Some(Commit::deserialize(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Load a commit that a ref or parent edge refers to
    pub fn require_commit(&self, fingerprint: &Fingerprint) -> anyhow::Result<Commit> {
        self.commit(fingerprint)?
            .with_context(|| format!("dangling commit reference {}", fingerprint))
    }

    pub fn commit_exists(&self, fingerprint: &Fingerprint) -> bool {
        self.commits_path().join(fingerprint.as_ref()).exists()
    }

    /// Enumerate every commit fingerprint in the store
    ///
    /// Returned in sorted filename order so that global-log and find
    /// output is stable.
    pub fn list_commit_ids(&self) -> anyhow::Result<Vec<Fingerprint>> {
        let mut ids = Vec::new();

        for entry in std::fs::read_dir(self.commits_path())
            .context("Unable to read the commit store")?
        {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                let name = entry.file_name().to_string_lossy().to_string();
                ids.push(Fingerprint::try_parse(name)?);
            }
        }

        ids.sort();
        Ok(ids)
    }

    /// Find all commits whose fingerprint starts with the given prefix
    ///
    /// Used to resolve abbreviated commit ids. An empty prefix matches
    /// nothing; multiple matches signal an ambiguous prefix and are all
    /// returned for the caller to reject.
    pub fn find_commits_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<Fingerprint>> {
        Ok(self
            .list_commit_ids()?
            .into_iter()
            .filter(|id| id.matches_prefix(prefix))
            .collect())
    }

    fn read_object(
        &self,
        store: PathBuf,
        fingerprint: &Fingerprint,
    ) -> anyhow::Result<Option<Bytes>> {
        let object_path = store.join(fingerprint.as_ref());

        if !object_path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Ok(Some(contents.into()))
    }

    fn write_object(
        &self,
        store: PathBuf,
        fingerprint: &Fingerprint,
        contents: Bytes,
    ) -> anyhow::Result<()> {
        let object_path = store.join(fingerprint.as_ref());

        // objects are immutable, re-writing the same fingerprint is a no-op
        if object_path.exists() {
            return Ok(());
        }

        let temp_object_path = store.join(Self::generate_temp_name());
        std::fs::write(&temp_object_path, &contents).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", std::process::id())
    }
}
