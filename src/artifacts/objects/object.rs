//! Core object traits
//!
//! `Packable` produces the exact bytes stored on disk; `Unpackable` parses
//! them back. `Object` derives the fingerprint from the serialized form,
//! which keeps the on-disk invariant `hash(read(fp)) == fp` true for every
//! stored object.

use crate::artifacts::objects::fingerprint::Fingerprint;
use anyhow::Result;
use bytes::Bytes;

/// Trait for serializing objects to their canonical stored form
pub trait Packable {
    /// Serialize the object to the exact bytes written to disk
    fn serialize(&self) -> Result<Bytes>;
}

/// Trait for deserializing objects from their canonical stored form
pub trait Unpackable {
    /// Deserialize the object from the stored bytes
    fn deserialize(bytes: &[u8]) -> Result<Self>
    where
        Self: Sized;
}

/// Core object trait
///
/// Implemented by the stored object types (Blob, Commit).
pub trait Object: Packable {
    /// Compute the object's fingerprint
    ///
    /// The fingerprint is the hash of the canonical serialized form.
    fn fingerprint(&self) -> Result<Fingerprint> {
        let content = self.serialize()?;
        Ok(Fingerprint::of(&content))
    }
}
