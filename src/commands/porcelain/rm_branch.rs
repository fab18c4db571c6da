use crate::areas::repository::Repository;
use crate::errors::Abort;

impl Repository {
    /// Delete a branch pointer
    ///
    /// The commits created under the branch stay in the store.
    pub fn rm_branch(&mut self, branch_name: &str) -> anyhow::Result<()> {
        if branch_name == self.current_branch()? {
            return Err(Abort::RemoveCurrentBranch.into());
        }
        if !self.refs().branch_exists(branch_name) {
            return Err(Abort::MissingBranch.into());
        }

        self.refs().delete_branch(branch_name)
    }
}
