use crate::areas::repository::Repository;

impl Repository {
    /// Display every commit in the store, in store enumeration order
    pub fn global_log(&mut self) -> anyhow::Result<()> {
        for fingerprint in self.database().list_commit_ids()? {
            let commit = self.database().require_commit(&fingerprint)?;
            self.write_log_record(&fingerprint, &commit)?;
        }

        Ok(())
    }
}
