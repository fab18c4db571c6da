use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::errors::Abort;

impl Repository {
    /// Stage a working file for addition
    ///
    /// Staging always unstages a pending removal of the same file (the
    /// last operation wins). If the file matches the current commit's
    /// version byte for byte, any stale staged addition is dropped
    /// instead of re-staged.
    pub fn add(&mut self, file_name: &str) -> anyhow::Result<()> {
        if !self.workspace().exists(file_name) {
            return Err(Abort::MissingWorkingFile.into());
        }

        let tracked = self.head_tree()?;
        let mut addition = self.staging().read_addition()?;
        let mut removal = self.staging().read_removal()?;

        removal.remove(file_name);

        let blob = Blob::new(self.workspace().read(file_name)?);
        let fingerprint = blob.fingerprint()?;

        if tracked.get(file_name) == Some(&fingerprint) {
            addition.remove(file_name);
        } else {
            self.database().put_blob(&blob)?;
            addition.insert(file_name.to_string(), fingerprint);
        }

        self.staging().write_addition(&addition)?;
        self.staging().write_removal(&removal)
    }
}
