use crate::areas::repository::Repository;
use crate::errors::Abort;
use std::io::Write;

impl Repository {
    /// Print the ids of every commit with the given message
    pub fn find(&mut self, message: &str) -> anyhow::Result<()> {
        if message.trim().is_empty() {
            return Err(Abort::BlankCommitMessage.into());
        }

        let mut found_any = false;
        for fingerprint in self.database().list_commit_ids()? {
            let commit = self.database().require_commit(&fingerprint)?;
            if commit.message() == message {
                writeln!(self.writer(), "{}", fingerprint)?;
                found_any = true;
            }
        }

        if !found_any {
            writeln!(self.writer(), "Found no commit with that message.")?;
        }

        Ok(())
    }
}
