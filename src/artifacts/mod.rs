//! Value types and algorithms
//!
//! Everything here is pure with respect to the working directory: objects
//! and their canonical encodings, commit graph traversal, merge planning,
//! and status computation. The `areas` layer owns the actual disk I/O.

pub mod graph;
pub mod merge;
pub mod objects;
pub mod status;
