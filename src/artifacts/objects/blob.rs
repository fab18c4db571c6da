//! Blob object
//!
//! Blobs store file content verbatim. A blob file on disk contains exactly
//! the working-file bytes, so its fingerprint is the hash of the raw
//! contents with no framing.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use bytes::Bytes;
use derive_new::new;

/// Immutable file contents identified by the fingerprint of the bytes
///
/// Blobs are never deleted; writing the same contents twice is a no-op and
/// fingerprint collisions are treated as content equality.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        Ok(self.content.clone())
    }
}

impl Unpackable for Blob {
    fn deserialize(bytes: &[u8]) -> anyhow::Result<Self> {
        Ok(Self::new(Bytes::copy_from_slice(bytes)))
    }
}

impl Object for Blob {}
