use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::fingerprint::Fingerprint;
use crate::errors::Abort;
use chrono::Utc;

impl Repository {
    /// Record the staged snapshot as a new commit on the current branch
    pub fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        if message.trim().is_empty() {
            return Err(Abort::BlankCommitMessage.into());
        }
        if self.staging().is_empty()? {
            return Err(Abort::NothingToCommit.into());
        }

        let head = self.head_fingerprint()?;
        self.write_snapshot_commit(message.to_string(), vec![head])?;

        Ok(())
    }

    /// Fold the staging area into the current tree and commit it
    ///
    /// The new tree is the current commit's tree overlaid with the staged
    /// additions, minus the staged removals. Objects are stored before
    /// the branch pointer advances, so an interruption leaves unreachable
    /// objects rather than dangling references. Shared by `commit` and
    /// `merge`.
    pub(crate) fn write_snapshot_commit(
        &mut self,
        message: String,
        parents: Vec<Fingerprint>,
    ) -> anyhow::Result<Fingerprint> {
        let addition = self.staging().read_addition()?;
        let removal = self.staging().read_removal()?;

        let mut tree = self.head_tree()?;
        tree.extend(addition);
        for file_name in &removal {
            tree.remove(file_name);
        }

        let commit = Commit::new(message, Utc::now(), parents, tree);
        let fingerprint = self.database().put_commit(&commit)?;

        let current_branch = self.current_branch()?;
        self.refs().write_branch(&current_branch, &fingerprint)?;
        self.staging().clear()?;

        Ok(fingerprint)
    }
}
