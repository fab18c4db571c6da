//! Split point finder for merge operations
//!
//! The split point is the common ancestor used as the base of a three-way
//! merge. The search is deliberately approximate:
//!
//! 1. If the other head is an ancestor of the current head, it is the
//!    split point (and vice versa).
//! 2. Otherwise, a breadth-first traversal from the current head over
//!    both parent edges returns the first commit discovered that is an
//!    ancestor of the other head.
//!
//! The queue is processed level by level; within a level, commits are
//! examined in insertion order, so ties between candidates at the same
//! depth go to the earliest-discovered one. On criss-crossed histories
//! this can differ from the graph-theoretic lowest common ancestor; the
//! behavior is kept as-is for compatibility with existing repositories
//! rather than upgraded to a full merge-base search.

use crate::artifacts::objects::fingerprint::Fingerprint;
use std::collections::{HashSet, VecDeque};

/// Finds the split point between two commit heads
///
/// Parameterized by a function that loads the ordered parent list of any
/// commit, so the traversal works against the on-disk store in production
/// and an in-memory graph in tests.
pub struct SplitFinder<LoadParentsFn>
where
    LoadParentsFn: Fn(&Fingerprint) -> anyhow::Result<Vec<Fingerprint>>,
{
    /// Function returning `{parent1, parent2?}` for a commit
    load_parents: LoadParentsFn,
}

impl<LoadParentsFn> SplitFinder<LoadParentsFn>
where
    LoadParentsFn: Fn(&Fingerprint) -> anyhow::Result<Vec<Fingerprint>>,
{
    pub fn new(load_parents: LoadParentsFn) -> Self {
        Self { load_parents }
    }

    /// Every commit reachable from `head` via any parent edge, including
    /// `head` itself
    pub fn ancestors(&self, head: &Fingerprint) -> anyhow::Result<HashSet<Fingerprint>> {
        let mut ancestors = HashSet::new();
        let mut queue = VecDeque::from([head.clone()]);

        while let Some(fingerprint) = queue.pop_front() {
            if !ancestors.insert(fingerprint.clone()) {
                continue;
            }

            for parent in (self.load_parents)(&fingerprint)? {
                queue.push_back(parent);
            }
        }

        Ok(ancestors)
    }

    /// Find the split point of two heads
    ///
    /// Returns `None` only for heads with no common history, which cannot
    /// happen for branches grown from one initial commit.
    pub fn split_point(
        &self,
        current: &Fingerprint,
        other: &Fingerprint,
    ) -> anyhow::Result<Option<Fingerprint>> {
        let current_ancestors = self.ancestors(current)?;
        if current_ancestors.contains(other) {
            return Ok(Some(other.clone()));
        }

        let other_ancestors = self.ancestors(other)?;
        if other_ancestors.contains(current) {
            return Ok(Some(current.clone()));
        }

        // breadth-first from the current head; the first commit discovered
        // that the other side can also reach wins
        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([current.clone()]);

        while let Some(fingerprint) = queue.pop_front() {
            if !visited.insert(fingerprint.clone()) {
                continue;
            }

            if other_ancestors.contains(&fingerprint) {
                return Ok(Some(fingerprint));
            }

            for parent in (self.load_parents)(&fingerprint)? {
                queue.push_back(parent);
            }
        }

        Ok(None)
    }
}
