//! # Error Taxonomy
//!
//! Every failure this crate can report, in one place. The taxonomy is
//! deliberately small: parsing and construction either succeed or fail with
//! one of these typed errors, synchronously, and every one of them is a
//! recoverable caller-side condition. Nothing here is fatal to the process.
//!
//! Note what is *not* an error: a well-formed signature that simply doesn't
//! verify. That is the expected `Ok(false)` outcome of `verify`, kept on the
//! boolean channel so callers can't confuse "wrong signature" with
//! "malformed input".

use thiserror::Error;

use crate::key_type::KeyType;

/// Errors raised while parsing, constructing, or shape-checking keys.
///
/// The messages name algorithms and buffer lengths only — key material never
/// appears in an error, for the same reason it never appears in a log line.
#[derive(Debug, Error)]
pub enum KeyError {
    /// An algorithm name or numeric tag outside the closed registry.
    ///
    /// Raised on both lookup directions. There is no silent default: an
    /// unrecognized `"rsa"` prefix is a hard error, not an Ed25519 guess.
    #[error("unknown signature algorithm `{0}`")]
    UnknownAlgorithm(String),

    /// A canonical string with the wrong segment structure, or a payload
    /// whose decoded length doesn't fit the algorithm it claims.
    #[error("invalid key format: {0}")]
    InvalidKeyFormat(String),

    /// Malformed base58 text — characters outside the alphabet, mostly.
    #[error("invalid base58 payload: {0}")]
    DecodeError(#[from] bs58::decode::Error),

    /// A signature buffer that cannot possibly be valid for the algorithm,
    /// caught before it reaches the native verifier. A defensive shape
    /// check, not a security boundary.
    #[error("invalid signature length for {key_type}: expected {expected} bytes, got {actual}")]
    InvalidSignatureLength {
        key_type: KeyType,
        expected: usize,
        actual: usize,
    },
}
