use crate::areas::repository::Repository;

impl Repository {
    /// Move the current branch to the given commit and check it out
    ///
    /// Fails before touching anything if an untracked working file would
    /// be overwritten. Clears the staging area.
    pub fn reset(&mut self, commit_id: &str) -> anyhow::Result<()> {
        let fingerprint = self.resolve_commit_id(commit_id)?;
        let target = self.database().require_commit(&fingerprint)?;

        self.swap_working_tree(&target)?;

        let current_branch = self.current_branch()?;
        self.refs().write_branch(&current_branch, &fingerprint)
    }
}
