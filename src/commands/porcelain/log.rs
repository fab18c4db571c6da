use crate::areas::repository::Repository;
use crate::artifacts::graph::FirstParentWalk;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::fingerprint::Fingerprint;
use std::io::Write;

impl Repository {
    /// Display the history of the current branch
    ///
    /// Walks first-parent links from HEAD down to the initial commit,
    /// newest first.
    pub fn log(&mut self) -> anyhow::Result<()> {
        let head = self.head_fingerprint()?;

        for entry in FirstParentWalk::new(self.database(), head) {
            let (fingerprint, commit) = entry?;
            self.write_log_record(&fingerprint, &commit)?;
        }

        Ok(())
    }

    /// Write one log record
    ///
    /// ```text
    /// ===
    /// commit <40-hex>
    /// Merge: <first7> <first7>     (merge commits only)
    /// Date: Thu Jan 1 00:00:00 1970 +0000
    /// <message>
    ///
    /// ```
    pub(crate) fn write_log_record(
        &self,
        fingerprint: &Fingerprint,
        commit: &Commit,
    ) -> anyhow::Result<()> {
        writeln!(self.writer(), "===")?;
        writeln!(self.writer(), "commit {}", fingerprint)?;
        if let (Some(first), Some(second)) = (commit.first_parent(), commit.second_parent()) {
            writeln!(
                self.writer(),
                "Merge: {} {}",
                first.to_short(),
                second.to_short()
            )?;
        }
        writeln!(self.writer(), "Date: {}", commit.readable_timestamp())?;
        writeln!(self.writer(), "{}", commit.message())?;
        writeln!(self.writer())?;

        Ok(())
    }
}
