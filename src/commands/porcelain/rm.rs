use crate::areas::repository::Repository;
use crate::errors::Abort;

impl Repository {
    /// Unstage a file, or stage a tracked file for removal
    ///
    /// A tracked file is also deleted from the working tree; a file that
    /// is only staged for addition is merely unstaged.
    pub fn rm(&mut self, file_name: &str) -> anyhow::Result<()> {
        if file_name.trim().is_empty() {
            return Err(Abort::BlankFileName.into());
        }

        let tracked = self.head_tree()?;
        let mut addition = self.staging().read_addition()?;
        let mut removal = self.staging().read_removal()?;

        if !tracked.contains_key(file_name) && !addition.contains_key(file_name) {
            return Err(Abort::NothingToRemove.into());
        }

        addition.remove(file_name);

        if tracked.contains_key(file_name) {
            removal.insert(file_name.to_string());
            self.workspace().delete(file_name)?;
        }

        self.staging().write_addition(&addition)?;
        self.staging().write_removal(&removal)
    }
}
