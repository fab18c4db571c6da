//! Staging area
//!
//! Two persisted structures under `.gitlet/stagingArea/`:
//! - `ADDITION`: file name -> blob fingerprint, staged to be present in
//!   the next commit with those contents
//! - `REMOVAL`: file names staged to be absent from the next commit
//!
//! Both files exist from init onward, so readers never observe absence.
//! A file never appears in both structures at once; the command layer
//! keeps additions and removals mutually exclusive, last operation wins.
//!
//! ## File Format
//!
//! `ADDITION` holds one `<fingerprint> <name>` pair per line; `REMOVAL`
//! holds one name per line. Lines are sorted by name.

use crate::artifacts::objects::fingerprint::Fingerprint;
use crate::artifacts::objects::FINGERPRINT_LENGTH;
use anyhow::Context;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Staging directory name
const STAGING_DIR: &str = "stagingArea";

/// Addition map file name
const ADDITION_FILE: &str = "ADDITION";

/// Removal set file name
const REMOVAL_FILE: &str = "REMOVAL";

/// Addition map: file name -> blob fingerprint
pub type Addition = BTreeMap<String, Fingerprint>;

/// Removal set: file names
pub type Removal = BTreeSet<String>;

/// Persisted staging area
#[derive(Debug, new)]
pub struct Staging {
    /// Path to the repository directory (typically `.gitlet`)
    path: Box<Path>,
}

impl Staging {
    pub fn staging_path(&self) -> PathBuf {
        self.path.join(STAGING_DIR)
    }

    fn addition_path(&self) -> PathBuf {
        self.staging_path().join(ADDITION_FILE)
    }

    fn removal_path(&self) -> PathBuf {
        self.staging_path().join(REMOVAL_FILE)
    }

    pub fn read_addition(&self) -> anyhow::Result<Addition> {
        let contents = std::fs::read_to_string(self.addition_path())
            .context("Unable to read the staged addition map")?;

        let mut addition = Addition::new();
        for line in contents.lines() {
            if line.len() < FINGERPRINT_LENGTH + 1 {
                anyhow::bail!("Invalid staged addition entry: {}", line);
            }
            let (fingerprint, name) = line.split_at(FINGERPRINT_LENGTH);
            let fingerprint = Fingerprint::try_parse(fingerprint.to_string())?;
            let name = name
                .strip_prefix(' ')
                .with_context(|| format!("Invalid staged addition entry: {}", line))?;
            addition.insert(name.to_string(), fingerprint);
        }

        Ok(addition)
    }

    pub fn write_addition(&self, addition: &Addition) -> anyhow::Result<()> {
        let lines = addition
            .iter()
            .map(|(name, fingerprint)| format!("{} {}\n", fingerprint.as_ref(), name))
            .collect::<String>();

        std::fs::write(self.addition_path(), lines)
            .context("Unable to write the staged addition map")
    }

    pub fn read_removal(&self) -> anyhow::Result<Removal> {
        let contents = std::fs::read_to_string(self.removal_path())
            .context("Unable to read the staged removal set")?;

        Ok(contents.lines().map(|name| name.to_string()).collect())
    }

    pub fn write_removal(&self, removal: &Removal) -> anyhow::Result<()> {
        let lines = removal
            .iter()
            .map(|name| format!("{}\n", name))
            .collect::<String>();

        std::fs::write(self.removal_path(), lines)
            .context("Unable to write the staged removal set")
    }

    /// Reset both structures to empty
    pub fn clear(&self) -> anyhow::Result<()> {
        self.write_addition(&Addition::new())?;
        self.write_removal(&Removal::new())
    }

    /// Whether nothing at all is staged
    pub fn is_empty(&self) -> anyhow::Result<bool> {
        Ok(self.read_addition()?.is_empty() && self.read_removal()?.is_empty())
    }
}
