//! Value objects: fingerprints, blobs, commits
//!
//! All objects are content-addressed: the identity of a blob or commit is
//! the fingerprint of its serialized form, so any change to any field
//! yields a new identity.

pub mod blob;
pub mod commit;
pub mod fingerprint;
pub mod object;

/// Length of a full fingerprint in hex characters
pub const FINGERPRINT_LENGTH: usize = 40;
