//! Content fingerprint (SHA-1 hash)
//!
//! Fingerprints are 40-character lowercase hexadecimal strings and are the
//! identity of every blob and commit. Equality is string equality.
//!
//! ## Format
//!
//! - Full: 40 hex characters (e.g., "abc123...def")
//! - Short: First 7 characters, used in merge log lines

use crate::artifacts::objects::FINGERPRINT_LENGTH;
use sha1::{Digest, Sha1};

/// Content fingerprint
///
/// A 40-character lowercase hexadecimal string that uniquely identifies a
/// blob or a commit. Objects are stored on disk under their fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Compute the fingerprint of a byte sequence
    ///
    /// Deterministic and stable across runs and processes; this is the
    /// sole source of object identity.
    pub fn of(bytes: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(bytes);

        let digest = hasher.finalize();
        Fingerprint(format!("{digest:x}"))
    }

    /// Parse and validate a fingerprint from a string
    ///
    /// # Returns
    ///
    /// Validated fingerprint or error if invalid length/characters
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != FINGERPRINT_LENGTH {
            return Err(anyhow::anyhow!("Invalid fingerprint length: {}", id.len()));
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        {
            return Err(anyhow::anyhow!("Invalid fingerprint characters: {}", id));
        }
        Ok(Self(id))
    }

    /// Get the abbreviated form of the fingerprint
    ///
    /// # Returns
    ///
    /// First 7 characters of the hash
    pub fn to_short(&self) -> &str {
        &self.0[..7]
    }

    /// Check whether this fingerprint starts with the given prefix
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.0.starts_with(prefix)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::proptest;

    proptest! {
        #[test]
        fn fingerprints_are_deterministic(contents in ".*") {
            let first = Fingerprint::of(contents.as_bytes());
            let second = Fingerprint::of(contents.as_bytes());
            assert_eq!(first, second);
        }

        #[test]
        fn fingerprints_are_valid_lowercase_hex(contents in ".*") {
            let fingerprint = Fingerprint::of(contents.as_bytes());
            assert!(Fingerprint::try_parse(fingerprint.as_ref().to_string()).is_ok());
        }

        #[test]
        fn parse_rejects_wrong_length(id in "[0-9a-f]{0,39}") {
            assert!(Fingerprint::try_parse(id).is_err());
        }

        #[test]
        fn parse_rejects_non_hex(id in "[g-z]{40}") {
            assert!(Fingerprint::try_parse(id).is_err());
        }
    }

    #[test]
    fn known_digest() {
        // sha1("hi")
        let fingerprint = Fingerprint::of(b"hi");
        assert_eq!(
            fingerprint.as_ref(),
            "c22b5f9178342609428d6f51b2c5af4c0bde6a42"
        );
    }

    #[test]
    fn short_form_is_first_seven_chars() {
        let fingerprint = Fingerprint::of(b"hi");
        assert_eq!(fingerprint.to_short(), "c22b5f9");
    }

    #[test]
    fn parse_rejects_uppercase_hex() {
        let id = "C22B5F9178342609428D6F51B2C5AF4C0BDE6A42".to_string();
        assert!(Fingerprint::try_parse(id).is_err());
    }
}
