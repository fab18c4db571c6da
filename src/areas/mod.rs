//! On-disk areas of the repository
//!
//! Each area owns one slice of the persisted layout under `.gitlet/`:
//! the object database, the staging area, the branch/HEAD refs, plus the
//! working tree around it. `Repository` is the facade over all four.

pub mod database;
pub mod refs;
pub mod repository;
pub mod staging;
pub mod workspace;
