use crate::areas::repository::Repository;
use crate::artifacts::graph::split_finder::SplitFinder;
use crate::artifacts::merge;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Tree;
use crate::artifacts::objects::fingerprint::Fingerprint;
use crate::errors::Abort;
use anyhow::Context;
use bytes::Bytes;
use std::io::Write;

impl Repository {
    /// Merge another branch into the current branch
    ///
    /// Finds the split point, classifies every file by what each side did
    /// to it since then, applies the other side's changes (staging them as
    /// it goes), materializes conflict files, and records a commit with
    /// both heads as parents. The untracked-overwrite guard runs after
    /// planning and before any mutation.
    pub fn merge(&mut self, other_branch: &str) -> anyhow::Result<()> {
        if !self.staging().is_empty()? {
            return Err(Abort::UncommittedChanges.into());
        }
        if !self.refs().branch_exists(other_branch) {
            return Err(Abort::MissingBranch.into());
        }
        let current_branch = self.current_branch()?;
        if other_branch == current_branch {
            return Err(Abort::MergeWithSelf.into());
        }

        let current_fingerprint = self.head_fingerprint()?;
        let other_fingerprint = self
            .refs()
            .read_branch(other_branch)?
            .with_context(|| format!("branch {} disappeared during merge", other_branch))?;

        let split_fingerprint = {
            let database = self.database();
            let finder = SplitFinder::new(|fingerprint: &Fingerprint| {
                Ok(database.require_commit(fingerprint)?.parents().to_vec())
            });
            finder.split_point(&current_fingerprint, &other_fingerprint)?
        }
        .context("no common ancestor between the merged branches")?;

        if split_fingerprint == other_fingerprint {
            writeln!(
                self.writer(),
                "Given branch is an ancestor of the current branch."
            )?;
            return Ok(());
        }
        if split_fingerprint == current_fingerprint {
            // fast-forward: the current branch simply advances to the
            // other head, nothing to reconcile
            let target = self.database().require_commit(&other_fingerprint)?;
            self.swap_working_tree(&target)?;
            self.refs()
                .write_branch(&current_branch, &other_fingerprint)?;
            writeln!(self.writer(), "Current branch fast-forwarded.")?;
            return Ok(());
        }

        let split_tree = self
            .database()
            .require_commit(&split_fingerprint)?
            .into_tree();
        let current_tree = self.head_tree()?;
        let other_tree = self
            .database()
            .require_commit(&other_fingerprint)?
            .into_tree();

        let merge_plan = merge::plan(&split_tree, &current_tree, &other_tree);

        let touched = merge_plan.touched_files();
        for file_name in self.untracked_files()? {
            if touched.contains(&file_name) {
                return Err(Abort::UntrackedFileInTheWay.into());
            }
        }

        let mut addition = self.staging().read_addition()?;
        let mut removal = self.staging().read_removal()?;

        for file_name in &merge_plan.removals {
            self.workspace().delete(file_name)?;
            addition.remove(file_name);
            removal.insert(file_name.clone());
        }

        for (file_name, fingerprint) in &merge_plan.additions {
            self.restore_file(file_name, fingerprint)?;
            addition.insert(file_name.clone(), fingerprint.clone());
            removal.remove(file_name);
        }

        if !merge_plan.conflicts.is_empty() {
            writeln!(self.writer(), "Encountered a merge conflict.")?;

            for file_name in &merge_plan.conflicts {
                let current_side = self.side_contents(&current_tree, file_name)?;
                let other_side = self.side_contents(&other_tree, file_name)?;
                let contents =
                    merge::compose_conflict(current_side.as_deref(), other_side.as_deref());

                self.workspace().write(file_name, &contents)?;
                let fingerprint = self.database().put_blob(&Blob::new(contents))?;
                addition.insert(file_name.clone(), fingerprint);
                removal.remove(file_name);
            }
        }

        self.staging().write_addition(&addition)?;
        self.staging().write_removal(&removal)?;

        let message = format!("Merged {} into {}.", other_branch, current_branch);
        self.write_snapshot_commit(message, vec![current_fingerprint, other_fingerprint])?;

        Ok(())
    }

    fn side_contents(&self, tree: &Tree, file_name: &str) -> anyhow::Result<Option<Bytes>> {
        match tree.get(file_name) {
            Some(fingerprint) => {
                let blob = self.database().require_blob(fingerprint)?;
                Ok(Some(blob.content().clone()))
            }
            None => Ok(None),
        }
    }
}
