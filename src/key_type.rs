//! # Algorithm Registry
//!
//! The closed set of signature algorithms this crate speaks, with their
//! stable wire tags, canonical names, and expected buffer shapes.
//!
//! Two algorithms, deliberately far apart in design space:
//!
//! - **Ed25519** — the boring, battle-tested curve. Fast, deterministic,
//!   32-byte keys, 64-byte signatures.
//! - **Falcon-512** — NIST-selected lattice scheme (FN-DSA). Chunky keys and
//!   variable-length signatures, but it survives a quantum adversary.
//!
//! The numeric tags are wire constants, not array indices. The gap at `1` is
//! intentional: it is reserved for an algorithm the surrounding system knows
//! about but this crate does not implement. Never renumber these.

use std::fmt;
use std::str::FromStr;

use pqcrypto_falcon::falcon512;
use serde::{Deserialize, Serialize};

use crate::errors::KeyError;

/// All supported key types.
///
/// This enum is the single dispatch point for algorithm-specific behavior.
/// Adding a variant here means adding it everywhere the compiler tells you
/// to — which is exactly the point of keeping it closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum KeyType {
    Ed25519 = 0,
    Falcon512 = 2,
}

impl KeyType {
    /// Canonical lowercase name, as it appears in the `<algo>:<payload>`
    /// text form.
    pub const fn as_str(self) -> &'static str {
        match self {
            KeyType::Ed25519 => "ed25519",
            KeyType::Falcon512 => "falcon512",
        }
    }

    /// Case-insensitive name lookup. Fails on anything outside the registry —
    /// never defaults.
    pub fn from_name(name: &str) -> Result<Self, KeyError> {
        if name.eq_ignore_ascii_case("ed25519") {
            Ok(KeyType::Ed25519)
        } else if name.eq_ignore_ascii_case("falcon512") {
            Ok(KeyType::Falcon512)
        } else {
            Err(KeyError::UnknownAlgorithm(name.to_string()))
        }
    }

    /// The stable numeric wire tag.
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Reverse tag lookup. The registry has gaps; an unmapped tag is an
    /// error, not a neighbor.
    pub fn from_tag(tag: u8) -> Result<Self, KeyError> {
        match tag {
            0 => Ok(KeyType::Ed25519),
            2 => Ok(KeyType::Falcon512),
            other => Err(KeyError::UnknownAlgorithm(other.to_string())),
        }
    }

    /// Expected verification-key length in bytes. Checked at `PublicKey`
    /// construction, before any bytes reach the native backend.
    pub fn public_key_len(self) -> usize {
        match self {
            KeyType::Ed25519 => ed25519_dalek::PUBLIC_KEY_LENGTH,
            KeyType::Falcon512 => falcon512::public_key_bytes(),
        }
    }

    /// Expected length of the decoded secret blob a `KeyPair` is rebuilt from.
    ///
    /// Ed25519 secrets travel in the 64-byte expanded form (seed followed by
    /// the public key). Falcon secrets carry their verification key appended,
    /// because the scheme's secret key alone does not expose a public-key
    /// derivation through the backend we bind to.
    pub fn secret_key_len(self) -> usize {
        match self {
            KeyType::Ed25519 => ed25519_dalek::KEYPAIR_LENGTH,
            KeyType::Falcon512 => falcon512::secret_key_bytes() + falcon512::public_key_bytes(),
        }
    }

    /// Expected signature length in bytes.
    ///
    /// Exact for Ed25519. For Falcon-512 this is an upper bound — the
    /// scheme's detached signatures are variable-length, so the shape check
    /// in `verify` is `<=` rather than `==`.
    pub fn signature_len(self) -> usize {
        match self {
            KeyType::Ed25519 => ed25519_dalek::SIGNATURE_LENGTH,
            KeyType::Falcon512 => falcon512::signature_bytes(),
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyType {
    type Err = KeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_name(value)
    }
}
