use crate::areas::repository::Repository;
use crate::errors::Abort;
use anyhow::Context;

impl Repository {
    /// Checkout in one of its three forms
    ///
    /// - `checkout <branch>`: swap the working tree to the branch's head
    ///   and switch HEAD to it
    /// - `checkout -- <file>`: restore one file from the current commit
    /// - `checkout <commitId> -- <file>`: restore one file from the given
    ///   commit (short ids allowed)
    pub fn checkout(&mut self, target: Option<&str>, files: &[String]) -> anyhow::Result<()> {
        match (target, files) {
            (Some(branch_name), []) => self.checkout_branch(branch_name),
            (None, [file_name]) => self.checkout_file(None, file_name),
            (Some(commit_id), [file_name]) => self.checkout_file(Some(commit_id), file_name),
            _ => Err(Abort::IncorrectOperands.into()),
        }
    }

    /// Swap the working tree to another branch's head commit
    ///
    /// No branch pointer moves: the working tree and HEAD change, the
    /// staging area is cleared, and both branches keep pointing where
    /// they pointed before.
    fn checkout_branch(&mut self, branch_name: &str) -> anyhow::Result<()> {
        if !self.refs().branch_exists(branch_name) {
            return Err(Abort::NoSuchBranch.into());
        }
        if branch_name == self.current_branch()? {
            return Err(Abort::CheckoutCurrentBranch.into());
        }

        let target_fingerprint = self
            .refs()
            .read_branch(branch_name)?
            .with_context(|| format!("branch {} disappeared during checkout", branch_name))?;
        let target = self.database().require_commit(&target_fingerprint)?;

        self.swap_working_tree(&target)?;
        self.refs().write_head(branch_name)
    }

    /// Restore one file from a commit's tree into the working tree
    fn checkout_file(&mut self, commit_id: Option<&str>, file_name: &str) -> anyhow::Result<()> {
        let tree = match commit_id {
            Some(commit_id) => {
                let fingerprint = self.resolve_commit_id(commit_id)?;
                self.database().require_commit(&fingerprint)?.into_tree()
            }
            None => self.head_tree()?,
        };

        let fingerprint = tree
            .get(file_name)
            .ok_or(Abort::MissingFileInCommit)?;

        self.restore_file(file_name, fingerprint)
    }
}
