use crate::areas::refs::DEFAULT_BRANCH;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::errors::Abort;
use anyhow::Context;
use std::fs;

impl Repository {
    /// Create a new repository in the current directory
    ///
    /// Lays out the `.gitlet` directory, persists an empty staging area,
    /// stores the initial commit and points a fresh `master` branch (and
    /// HEAD) at it.
    pub fn init(&mut self) -> anyhow::Result<()> {
        if self.is_initialized() {
            return Err(Abort::AlreadyInitialized.into());
        }

        fs::create_dir_all(self.database().blobs_path())
            .context("Failed to create the blob store directory")?;
        fs::create_dir_all(self.database().commits_path())
            .context("Failed to create the commit store directory")?;
        fs::create_dir_all(self.staging().staging_path())
            .context("Failed to create the staging area directory")?;
        fs::create_dir_all(self.refs().branches_path())
            .context("Failed to create the branches directory")?;

        self.staging().clear()?;

        let initial = Commit::initial();
        let fingerprint = self.database().put_commit(&initial)?;
        self.refs().write_branch(DEFAULT_BRANCH, &fingerprint)?;
        self.refs().write_head(DEFAULT_BRANCH)?;

        Ok(())
    }
}
