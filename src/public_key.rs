//! # Public Keys
//!
//! The verification half of an identity, polymorphic over the two supported
//! algorithms.
//!
//! `PublicKey` is a closed sum type, not a trait object. Dispatch happens by
//! matching on the variant, which means the algorithm that verifies a
//! signature is always the algorithm baked into the key at construction —
//! there is no path where a Falcon signature sneaks through an Ed25519
//! verifier or vice versa. Algorithm confusion is the classic way signature
//! systems die; the type system is cheaper than an audit.
//!
//! Keys are immutable value objects. Construction validates the byte length
//! against the registry; after that, every operation is a pure read.

use std::fmt;
use std::str::FromStr;

use ed25519_dalek::{Signature as DalekSignature, Verifier, VerifyingKey};
use pqcrypto_falcon::falcon512;
use pqcrypto_traits::sign::{DetachedSignature as _, PublicKey as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::KeyError;
use crate::key_type::KeyType;
use crate::serialize::{base_decode, base_encode, split_encoded};

/// An Ed25519 verification key. 32 bytes.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ed25519PublicKey {
    bytes: [u8; 32],
}

/// A Falcon-512 verification key. 897 bytes of lattice.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Falcon512PublicKey {
    bytes: Vec<u8>,
}

/// A public key of any supported algorithm.
///
/// Parse one from the canonical `<algo>:<base58>` form, or take it off a
/// [`KeyPair`](crate::key_pair::KeyPair). Renders back to the explicit
/// two-segment form — always, even for Ed25519, whose bare legacy form is
/// accepted on input only.
///
/// # Examples
///
/// ```
/// use helix_keys::{KeyPair, PublicKey};
///
/// let kp = KeyPair::from_random("ed25519").unwrap();
/// let encoded = kp.public_key().to_string();
/// let decoded: PublicKey = encoded.parse().unwrap();
/// assert_eq!(decoded, kp.public_key());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum PublicKey {
    Ed25519(Ed25519PublicKey),
    Falcon512(Falcon512PublicKey),
}

impl Ed25519PublicKey {
    /// Build from a byte slice, rejecting anything that isn't 32 bytes.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        if slice.len() != KeyType::Ed25519.public_key_len() {
            return Err(KeyError::InvalidKeyFormat(format!(
                "ed25519 public key must be {} bytes, got {}",
                KeyType::Ed25519.public_key_len(),
                slice.len()
            )));
        }
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(slice);
        Ok(Self { bytes })
    }

    pub(crate) fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Verify a detached Ed25519 signature.
    ///
    /// A buffer that isn't exactly 64 bytes cannot be an Ed25519 signature
    /// and is rejected up front. Key bytes that don't decode to a curve
    /// point (possible when a key was parsed off the wire rather than
    /// derived locally) are a deterministic `false`, never a panic.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool, KeyError> {
        let expected = KeyType::Ed25519.signature_len();
        if signature.len() != expected {
            return Err(KeyError::InvalidSignatureLength {
                key_type: KeyType::Ed25519,
                expected,
                actual: signature.len(),
            });
        }
        let Ok(verifying_key) = VerifyingKey::from_bytes(&self.bytes) else {
            return Ok(false);
        };
        let mut sig = [0u8; 64];
        sig.copy_from_slice(signature);
        Ok(verifying_key
            .verify(message, &DalekSignature::from_bytes(&sig))
            .is_ok())
    }
}

impl Falcon512PublicKey {
    /// Build from a byte slice, rejecting anything that isn't the scheme's
    /// fixed public-key length.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        if slice.len() != KeyType::Falcon512.public_key_len() {
            return Err(KeyError::InvalidKeyFormat(format!(
                "falcon512 public key must be {} bytes, got {}",
                KeyType::Falcon512.public_key_len(),
                slice.len()
            )));
        }
        Ok(Self {
            bytes: slice.to_vec(),
        })
    }

    /// For bytes that came straight out of the backend, which only emits
    /// fixed-length keys.
    pub(crate) fn from_vec(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Verify a detached Falcon-512 signature.
    ///
    /// Falcon signatures are variable-length, so the shape check is an upper
    /// bound: anything longer than the scheme's maximum cannot be valid.
    /// Within the bound, a signature the backend refuses to parse or verify
    /// is simply `false`.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool, KeyError> {
        let max = KeyType::Falcon512.signature_len();
        if signature.len() > max {
            return Err(KeyError::InvalidSignatureLength {
                key_type: KeyType::Falcon512,
                expected: max,
                actual: signature.len(),
            });
        }
        let Ok(sig) = falcon512::DetachedSignature::from_bytes(signature) else {
            return Ok(false);
        };
        let Ok(pk) = falcon512::PublicKey::from_bytes(&self.bytes) else {
            return Ok(false);
        };
        Ok(falcon512::verify_detached_signature(&sig, message, &pk).is_ok())
    }
}

impl PublicKey {
    /// Construct from an algorithm tag and raw verification-key bytes.
    ///
    /// The length check happens here, once, so every `PublicKey` in the
    /// program is known well-shaped for its algorithm.
    pub fn from_parts(key_type: KeyType, data: &[u8]) -> Result<Self, KeyError> {
        match key_type {
            KeyType::Ed25519 => Ok(PublicKey::Ed25519(Ed25519PublicKey::try_from_slice(data)?)),
            KeyType::Falcon512 => Ok(PublicKey::Falcon512(Falcon512PublicKey::try_from_slice(
                data,
            )?)),
        }
    }

    /// Which algorithm this key verifies for.
    pub fn key_type(&self) -> KeyType {
        match self {
            PublicKey::Ed25519(_) => KeyType::Ed25519,
            PublicKey::Falcon512(_) => KeyType::Falcon512,
        }
    }

    /// The raw verification-key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            PublicKey::Ed25519(pk) => pk.as_bytes(),
            PublicKey::Falcon512(pk) => pk.as_bytes(),
        }
    }

    /// Verify `signature` over `message` under this key's algorithm.
    ///
    /// Dispatches to exactly the native verifier bound to the variant —
    /// never across algorithms. `Ok(false)` is the well-formed-but-wrong
    /// outcome; `Err` is reserved for buffers that couldn't be a signature
    /// of this algorithm at all.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool, KeyError> {
        match self {
            PublicKey::Ed25519(pk) => pk.verify(message, signature),
            PublicKey::Falcon512(pk) => pk.verify(message, signature),
        }
    }
}

impl FromStr for PublicKey {
    type Err = KeyError;

    /// Parse the canonical form. One segment is the Ed25519 legacy bare
    /// form; two segments name the algorithm explicitly; more is malformed.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (key_type, payload) = split_encoded(value)?;
        let data = base_decode(payload)?;
        Self::from_parts(key_type, &data)
    }
}

impl TryFrom<&str> for PublicKey {
    type Error = KeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for PublicKey {
    /// Always the explicit `<algo>:<base58>` form, both algorithms.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key_type(), base_encode(self.as_bytes()))
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Public keys are not secret, but a 897-byte Falcon key turns a log
        // line into a wall. Truncate.
        let encoded = base_encode(self.as_bytes());
        let short = &encoded[..encoded.len().min(12)];
        write!(f, "PublicKey({}:{}…)", self.key_type(), short)
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key_pair::KeyPair;

    fn ed25519_key() -> PublicKey {
        KeyPair::from_random("ed25519").unwrap().public_key()
    }

    fn falcon512_key() -> PublicKey {
        KeyPair::from_random("falcon512").unwrap().public_key()
    }

    #[test]
    fn from_parts_rejects_wrong_lengths() {
        assert!(matches!(
            PublicKey::from_parts(KeyType::Ed25519, &[0u8; 31]),
            Err(KeyError::InvalidKeyFormat(_))
        ));
        assert!(matches!(
            PublicKey::from_parts(KeyType::Falcon512, &[0u8; 32]),
            Err(KeyError::InvalidKeyFormat(_))
        ));
    }

    #[test]
    fn display_round_trips_both_algorithms() {
        for pk in [ed25519_key(), falcon512_key()] {
            let encoded = pk.to_string();
            let decoded: PublicKey = encoded.parse().unwrap();
            assert_eq!(decoded, pk);
            assert_eq!(decoded.to_string(), encoded);
        }
    }

    #[test]
    fn display_always_uses_the_explicit_form() {
        assert!(ed25519_key().to_string().starts_with("ed25519:"));
        assert!(falcon512_key().to_string().starts_with("falcon512:"));
    }

    #[test]
    fn bare_legacy_form_is_ed25519_only() {
        let pk = ed25519_key();
        let explicit = pk.to_string();
        let bare = explicit.strip_prefix("ed25519:").unwrap();

        let from_bare: PublicKey = bare.parse().unwrap();
        assert_eq!(from_bare, pk);
        // Re-encoding the bare form produces the explicit form.
        assert_eq!(from_bare.to_string(), explicit);
    }

    #[test]
    fn malformed_strings_are_rejected_with_the_right_error() {
        assert!(matches!(
            "bogus:bogus:bogus".parse::<PublicKey>(),
            Err(KeyError::InvalidKeyFormat(_))
        ));
        assert!(matches!(
            "rsa:AAAA".parse::<PublicKey>(),
            Err(KeyError::UnknownAlgorithm(_))
        ));
        assert!(matches!(
            "ed25519:not-base58-0OIl".parse::<PublicKey>(),
            Err(KeyError::DecodeError(_))
        ));
        // Valid base58, wrong decoded length.
        assert!(matches!(
            "ed25519:Cn8eVZg".parse::<PublicKey>(),
            Err(KeyError::InvalidKeyFormat(_))
        ));
    }

    #[test]
    fn ed25519_rejects_impossible_signature_lengths() {
        let pk = ed25519_key();
        let err = pk.verify(b"msg", &[0u8; 63]).unwrap_err();
        assert!(matches!(
            err,
            KeyError::InvalidSignatureLength {
                key_type: KeyType::Ed25519,
                expected: 64,
                actual: 63,
            }
        ));
    }

    #[test]
    fn falcon512_rejects_oversized_signatures() {
        let pk = falcon512_key();
        let too_big = vec![0u8; KeyType::Falcon512.signature_len() + 1];
        assert!(matches!(
            pk.verify(b"msg", &too_big),
            Err(KeyError::InvalidSignatureLength { .. })
        ));
    }

    #[test]
    fn garbage_signature_of_plausible_shape_is_false_not_error() {
        let pk = ed25519_key();
        assert_eq!(pk.verify(b"msg", &[0u8; 64]).unwrap(), false);

        let pk = falcon512_key();
        assert_eq!(pk.verify(b"msg", &[0u8; 64]).unwrap(), false);
    }

    #[test]
    fn serde_uses_the_canonical_string_form() {
        let pk = falcon512_key();
        let json = serde_json::to_string(&pk).unwrap();
        assert_eq!(json, format!("\"{}\"", pk));
        let back: PublicKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pk);
    }

    #[test]
    fn serde_rejects_malformed_strings() {
        assert!(serde_json::from_str::<PublicKey>("\"rsa:AAAA\"").is_err());
        assert!(serde_json::from_str::<PublicKey>("\"a:b:c\"").is_err());
    }

    #[test]
    fn usable_as_a_map_key() {
        use std::collections::HashMap;
        let pk = ed25519_key();
        let mut m = HashMap::new();
        m.insert(pk.clone(), "account.alice");
        assert_eq!(m[&pk], "account.alice");
    }

    #[test]
    fn debug_is_truncated() {
        let pk = falcon512_key();
        let dbg = format!("{:?}", pk);
        assert!(dbg.starts_with("PublicKey(falcon512:"));
        assert!(dbg.len() < 50);
    }
}
