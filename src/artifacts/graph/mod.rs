//! Commit graph traversal
//!
//! Commits form a DAG with up to two parent edges. Edges are fingerprint
//! references resolved through the commit store, so traversal primitives
//! take the store (or a loader closure) rather than owning pointers.

pub mod split_finder;

use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::fingerprint::Fingerprint;

/// Lazy walk along first-parent edges
///
/// Yields `(fingerprint, commit)` pairs starting from the given commit and
/// following `parent1` links until the initial commit. Backs the `log`
/// command.
pub struct FirstParentWalk<'db> {
    database: &'db Database,
    next: Option<Fingerprint>,
}

impl<'db> FirstParentWalk<'db> {
    pub fn new(database: &'db Database, from: Fingerprint) -> Self {
        FirstParentWalk {
            database,
            next: Some(from),
        }
    }
}

impl Iterator for FirstParentWalk<'_> {
    type Item = anyhow::Result<(Fingerprint, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let fingerprint = self.next.take()?;

        match self.database.require_commit(&fingerprint) {
            Ok(commit) => {
                self.next = commit.first_parent().cloned();
                Some(Ok((fingerprint, commit)))
            }
            Err(err) => Some(Err(err)),
        }
    }
}
