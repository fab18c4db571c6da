use crate::areas::repository::Repository;
use crate::errors::Abort;

impl Repository {
    /// Create a new branch pointing at the current head commit
    ///
    /// Does not switch HEAD.
    pub fn branch(&mut self, branch_name: &str) -> anyhow::Result<()> {
        if self.refs().branch_exists(branch_name) {
            return Err(Abort::BranchAlreadyExists.into());
        }

        let head = self.head_fingerprint()?;
        self.refs().write_branch(branch_name, &head)
    }
}
