use crate::areas::repository::Repository;
use crate::artifacts::objects::fingerprint::Fingerprint;
use crate::artifacts::status::{StatusReport, WorkingTree};
use std::io::Write;

impl Repository {
    /// Display the five status sections
    ///
    /// Branches (current first, marked with `*`), staged files, removed
    /// files, modifications not staged for commit, untracked files. Every
    /// section ends with a blank line.
    pub fn status(&mut self) -> anyhow::Result<()> {
        let branches = self.refs().list_branches()?;
        let current_branch = self.current_branch()?;
        let tracked = self.head_tree()?;
        let addition = self.staging().read_addition()?;
        let removal = self.staging().read_removal()?;

        let mut working = WorkingTree::new();
        for file_name in self.workspace().list_files()? {
            let contents = self.workspace().read(&file_name)?;
            working.insert(file_name, Fingerprint::of(&contents));
        }

        let report = StatusReport::collect(branches, &tracked, &addition, &removal, &working);

        writeln!(self.writer(), "=== Branches ===")?;
        writeln!(self.writer(), "*{}", current_branch)?;
        for branch in &report.branches {
            if branch != &current_branch {
                writeln!(self.writer(), "{}", branch)?;
            }
        }
        writeln!(self.writer())?;

        writeln!(self.writer(), "=== Staged Files ===")?;
        for file_name in &report.staged {
            writeln!(self.writer(), "{}", file_name)?;
        }
        writeln!(self.writer())?;

        writeln!(self.writer(), "=== Removed Files ===")?;
        for file_name in &report.removed {
            writeln!(self.writer(), "{}", file_name)?;
        }
        writeln!(self.writer())?;

        writeln!(self.writer(), "=== Modifications Not Staged For Commit ===")?;
        for file_name in &report.modified {
            writeln!(self.writer(), "{} (modified)", file_name)?;
        }
        for file_name in &report.deleted {
            writeln!(self.writer(), "{} (deleted)", file_name)?;
        }
        writeln!(self.writer())?;

        writeln!(self.writer(), "=== Untracked Files ===")?;
        for file_name in &report.untracked {
            writeln!(self.writer(), "{}", file_name)?;
        }
        writeln!(self.writer())?;

        Ok(())
    }
}
