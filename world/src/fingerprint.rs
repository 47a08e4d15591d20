//! Canonical state fingerprinting with domain separation.
//!
//! Exactly one place defines fingerprint hashing. Algorithm: SHA-256,
//! rendered as `"sha256:<hex_digest>"`. Domain prefixes are
//! null-terminated to prevent cross-domain collisions.

use sha2::{Digest, Sha256};

use crate::state::WorldStateV1;

/// Domain prefix for world-state fingerprints.
pub const DOMAIN_WORLD_STATE: &[u8] = b"SHRDLITE::WORLD_STATE::V1\0";

/// A content-addressed fingerprint in `"sha256:hex"` format.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateFingerprint(String);

impl StateFingerprint {
    /// The full `"sha256:hex"` representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.0[7..] // "sha256:" is 7 bytes
    }
}

impl std::fmt::Display for StateFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the canonical hash of a byte slice with domain separation.
///
/// Computes `sha256(domain_prefix || data)`. The domain prefix must include
/// its null terminator (the `DOMAIN_*` constants already do).
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> StateFingerprint {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    StateFingerprint(format!("sha256:{}", hex::encode(hasher.finalize())))
}

/// Fingerprint a world state from its canonical identity bytes.
#[must_use]
pub fn state_fingerprint(state: &WorldStateV1) -> StateFingerprint {
    canonical_hash(DOMAIN_WORLD_STATE, &state.identity_bytes())
}
