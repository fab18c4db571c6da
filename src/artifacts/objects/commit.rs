//! Commit object
//!
//! Commits are immutable records of a snapshot plus its history:
//! - A commit message
//! - A timestamp (the initial commit uses the epoch)
//! - Up to two parent fingerprints (two only for merge commits)
//! - A tree: the mapping from file name to blob fingerprint
//!
//! ## Format
//!
//! On disk, one line per field in a fixed order so that the serialized
//! bytes (and therefore the commit's fingerprint) are reproducible:
//! ```text
//! timestamp <unix-seconds>
//! parent <fingerprint>
//! tree <fingerprint> <file name>
//!
//! <commit message>
//! ```
//! Parent lines appear first parent first; tree lines are sorted by file
//! name. The fingerprint of a commit is the hash of exactly these bytes.

use crate::artifacts::objects::fingerprint::Fingerprint;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::FINGERPRINT_LENGTH;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::io::Write;

/// Tree of a commit: file name to blob fingerprint
///
/// Keys are unique; iteration order is sorted by name, which makes the
/// serialized form canonical.
pub type Tree = BTreeMap<String, Fingerprint>;

/// Message of the sentinel initial commit
pub const INITIAL_COMMIT_MESSAGE: &str = "initial commit";

/// Commit record
///
/// Created on commit/merge and never mutated or deleted afterwards.
/// Parent edges are fingerprint references resolved through the commit
/// store, never owning pointers, so the commit DAG stays acyclic by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Commit message (non-empty except for the initial commit)
    message: String,
    /// Absolute instant the commit was created
    timestamp: DateTime<Utc>,
    /// Parent fingerprints: empty for the initial commit, two for merges
    parents: Vec<Fingerprint>,
    /// Snapshot: file name -> blob fingerprint
    tree: Tree,
}

impl Commit {
    pub fn new(
        message: String,
        timestamp: DateTime<Utc>,
        parents: Vec<Fingerprint>,
        tree: Tree,
    ) -> Self {
        Commit {
            message,
            timestamp,
            parents,
            tree,
        }
    }

    /// The sentinel initial commit: epoch timestamp, no parents, empty tree
    pub fn initial() -> Self {
        Commit {
            message: INITIAL_COMMIT_MESSAGE.to_string(),
            timestamp: DateTime::UNIX_EPOCH,
            parents: Vec::new(),
            tree: Tree::new(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Ordered parent list: {parent1, parent2?}
    pub fn parents(&self) -> &[Fingerprint] {
        &self.parents
    }

    pub fn first_parent(&self) -> Option<&Fingerprint> {
        self.parents.first()
    }

    pub fn second_parent(&self) -> Option<&Fingerprint> {
        self.parents.get(1)
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() == 2
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn into_tree(self) -> Tree {
        self.tree
    }

    /// Format the timestamp for log records
    ///
    /// # Returns
    ///
    /// String like "Thu Jan 1 00:00:00 1970 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format("%a %b %-d %H:%M:%S %Y %z").to_string()
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut lines = vec![];

        lines.push(format!("timestamp {}", self.timestamp.timestamp()));
        for parent in &self.parents {
            lines.push(format!("parent {}", parent.as_ref()));
        }
        for (name, fingerprint) in &self.tree {
            lines.push(format!("tree {} {}", fingerprint.as_ref(), name));
        }
        lines.push(String::new());
        lines.push(self.message.to_string());

        let record = lines.join("\n");

        let mut record_bytes = Vec::new();
        record_bytes.write_all(record.as_bytes())?;

        Ok(Bytes::from(record_bytes))
    }
}

impl Unpackable for Commit {
    fn deserialize(bytes: &[u8]) -> anyhow::Result<Self> {
        let content = std::str::from_utf8(bytes).context("Invalid commit record: not UTF-8")?;
        let mut lines = content.lines();

        let timestamp_line = lines
            .next()
            .context("Invalid commit record: missing timestamp line")?;
        let seconds = timestamp_line
            .strip_prefix("timestamp ")
            .context("Invalid commit record: invalid timestamp line")?
            .parse::<i64>()
            .context("Invalid commit record: invalid timestamp value")?;
        let timestamp = DateTime::<Utc>::from_timestamp(seconds, 0)
            .context("Invalid commit record: timestamp out of range")?;

        let mut parents = Vec::new();
        let mut next_line = lines
            .next()
            .context("Invalid commit record: missing field separator")?;

        while let Some(parent) = next_line.strip_prefix("parent ") {
            parents.push(Fingerprint::try_parse(parent.to_string())?);

            next_line = lines
                .next()
                .context("Invalid commit record: missing field separator")?;
        }

        let mut tree = Tree::new();
        while let Some(entry) = next_line.strip_prefix("tree ") {
            if entry.len() < FINGERPRINT_LENGTH + 1 {
                anyhow::bail!("Invalid commit record: invalid tree line");
            }
            let (fingerprint, name) = entry.split_at(FINGERPRINT_LENGTH);
            let fingerprint = Fingerprint::try_parse(fingerprint.to_string())?;
            let name = name
                .strip_prefix(' ')
                .context("Invalid commit record: invalid tree line")?;
            tree.insert(name.to_string(), fingerprint);

            next_line = lines
                .next()
                .context("Invalid commit record: missing field separator")?;
        }

        if !next_line.is_empty() {
            anyhow::bail!("Invalid commit record: missing field separator");
        }

        let message = lines.collect::<Vec<&str>>().join("\n");
        Ok(Self::new(message, timestamp, parents, tree))
    }
}

impl Object for Commit {}
