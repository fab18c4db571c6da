//! Repository facade
//!
//! `Repository` coordinates the four on-disk areas (object database,
//! staging area, working tree, refs) and carries the output writer. Each
//! CLI invocation constructs one repository rooted at the current
//! directory and runs a single command against it.
//!
//! The "current commit" is always resolved through the HEAD indirection:
//! HEAD names a branch, the branch file names a commit.

use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::areas::staging::Staging;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::commit::{Commit, Tree};
use crate::artifacts::objects::fingerprint::Fingerprint;
use crate::artifacts::objects::FINGERPRINT_LENGTH;
use crate::errors::Abort;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Repository directory name
pub const GITLET_DIR: &str = ".gitlet";

/// Gitlet repository
///
/// Coordinates all repository operations and provides access to the
/// database, staging area, workspace, and refs subsystems. This is the
/// entry point for every command.
pub struct Repository {
    /// Working directory root
    path: Box<Path>,
    /// Output writer (stdout in production, a buffer in tests)
    writer: RefCell<Box<dyn std::io::Write>>,
    /// Object database
    database: Database,
    /// Staging area
    staging: Staging,
    /// Working tree
    workspace: Workspace,
    /// Branch and HEAD manager
    refs: Refs,
}

impl Repository {
    pub fn new(path: PathBuf, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let gitlet_path = path.join(GITLET_DIR);

        let database = Database::new(gitlet_path.clone().into_boxed_path());
        let staging = Staging::new(gitlet_path.clone().into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(gitlet_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            database,
            staging,
            workspace,
            refs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn gitlet_path(&self) -> PathBuf {
        self.path.join(GITLET_DIR)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn staging(&self) -> &Staging {
        &self.staging
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn is_initialized(&self) -> bool {
        self.gitlet_path().exists()
    }

    /// Every command except init requires an initialized repository
    pub fn ensure_initialized(&self) -> anyhow::Result<()> {
        if !self.is_initialized() {
            return Err(Abort::NotInitialized.into());
        }
        Ok(())
    }

    /// Name of the current branch (via HEAD)
    pub fn current_branch(&self) -> anyhow::Result<String> {
        self.refs.read_head()
    }

    /// Fingerprint of the current commit (HEAD -> branch -> commit)
    pub fn head_fingerprint(&self) -> anyhow::Result<Fingerprint> {
        let branch = self.current_branch()?;
        self.refs
            .read_branch(&branch)?
            .with_context(|| format!("HEAD names a missing branch {}", branch))
    }

    pub fn head_commit(&self) -> anyhow::Result<Commit> {
        let fingerprint = self.head_fingerprint()?;
        self.database.require_commit(&fingerprint)
    }

    pub fn head_tree(&self) -> anyhow::Result<Tree> {
        Ok(self.head_commit()?.into_tree())
    }

    /// Resolve a possibly abbreviated commit id to a stored commit
    ///
    /// A full-length id must name an existing commit; a shorter id must
    /// match exactly one stored commit. Anything else (no match, an
    /// ambiguous prefix, an empty or malformed id) fails with the same
    /// catalogue error.
    pub fn resolve_commit_id(&self, commit_id: &str) -> anyhow::Result<Fingerprint> {
        if commit_id.len() == FINGERPRINT_LENGTH {
            let fingerprint = Fingerprint::try_parse(commit_id.to_string())
                .map_err(|_| Abort::MissingCommit)?;
            if !self.database.commit_exists(&fingerprint) {
                return Err(Abort::MissingCommit.into());
            }
            return Ok(fingerprint);
        }

        let mut matches = self.database.find_commits_by_prefix(commit_id)?;
        match (matches.pop(), matches.is_empty()) {
            (Some(fingerprint), true) => Ok(fingerprint),
            _ => Err(Abort::MissingCommit.into()),
        }
    }

    /// Working files that are neither staged for addition nor tracked by
    /// the current commit
    pub fn untracked_files(&self) -> anyhow::Result<BTreeSet<String>> {
        let addition = self.staging.read_addition()?;
        let tracked = self.head_tree()?;

        Ok(self
            .workspace
            .list_files()?
            .into_iter()
            .filter(|name| !addition.contains_key(name) && !tracked.contains_key(name))
            .collect())
    }

    /// Overwrite a working file with the contents of a stored blob
    pub fn restore_file(&self, file_name: &str, fingerprint: &Fingerprint) -> anyhow::Result<()> {
        let blob = self.database.require_blob(fingerprint)?;
        self.workspace.write(file_name, blob.content())
    }

    /// Swap the working tree to the snapshot of the target commit
    ///
    /// The "safe reset" shared by `checkout <branch>` and `reset`: fail if
    /// any untracked working file is tracked in the target, delete files
    /// tracked by the current commit but absent from the target, overwrite
    /// every file of the target tree, and clear the staging area. The
    /// untracked guard runs before any mutation; branch pointers are the
    /// caller's business.
    pub fn swap_working_tree(&self, target: &Commit) -> anyhow::Result<()> {
        let target_tree = target.tree();
        let untracked = self.untracked_files()?;

        for file_name in &untracked {
            if target_tree.contains_key(file_name) {
                return Err(Abort::UntrackedFileInTheWay.into());
            }
        }

        let current_tree = self.head_tree()?;
        for file_name in current_tree.keys() {
            if !target_tree.contains_key(file_name) {
                self.workspace.delete(file_name)?;
            }
        }

        for (file_name, fingerprint) in target_tree {
            self.restore_file(file_name, fingerprint)?;
        }

        self.staging.clear()
    }
}
