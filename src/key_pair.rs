//! # Key Pairs
//!
//! The signing half of an identity: a secret key plus the public key derived
//! from it, welded together at construction so they can never drift apart.
//!
//! Like [`PublicKey`](crate::public_key::PublicKey), `KeyPair` is a closed
//! sum type over the two supported algorithms. Every construction path —
//! fresh randomness or a canonical secret string — either produces a
//! consistent pair or fails. There is no partially-built state to observe.
//!
//! ## Secret encodings
//!
//! The canonical text form is `<algo>:<base58(secret blob)>`, and the blob
//! layout is per-algorithm:
//!
//! - **Ed25519**: 64 bytes, seed followed by the public key (the NaCl
//!   expanded-secret layout). Decoding re-derives the public key from the
//!   seed and rejects a blob whose trailing half disagrees.
//! - **Falcon-512**: secret-key bytes followed by public-key bytes. The
//!   backend exposes no public-key derivation from a bare secret, so the
//!   blob carries the verification key and the pair is self-checked with a
//!   sign/verify probe on decode.
//!
//! Secret material never appears in logs, `Debug` output, or error messages.

use std::fmt;
use std::str::FromStr;

use ed25519_dalek::{Signer as _, SigningKey};
use pqcrypto_falcon::falcon512;
use pqcrypto_traits::sign::{DetachedSignature as _, PublicKey as _, SecretKey as _};
use rand::rngs::OsRng;

use crate::errors::KeyError;
use crate::key_type::KeyType;
use crate::public_key::{Ed25519PublicKey, Falcon512PublicKey, PublicKey};
use crate::serialize::{base_decode, base_encode, split_encoded};

/// A detached signature, tagged with the key that produced it.
///
/// Transient: signing returns one, verification consumes its bytes. Nothing
/// in this crate persists signatures.
#[derive(Clone, PartialEq, Eq)]
pub struct Signature {
    bytes: Vec<u8>,
    public_key: PublicKey,
}

impl Signature {
    pub(crate) fn new(bytes: Vec<u8>, public_key: PublicKey) -> Self {
        Self { bytes, public_key }
    }

    /// The raw signature bytes. Fixed 64 for Ed25519, variable for Falcon.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the signature, keeping only the bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// The signer's public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// The algorithm that produced this signature.
    pub fn key_type(&self) -> KeyType {
        self.public_key.key_type()
    }
}

impl fmt::Display for Signature {
    /// Signatures share the keys' `<algo>:<base58>` convention.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key_type(), base_encode(&self.bytes))
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = base_encode(&self.bytes);
        let short = &encoded[..encoded.len().min(12)];
        write!(f, "Signature({}:{}…)", self.key_type(), short)
    }
}

/// An Ed25519 signing identity.
pub struct Ed25519KeyPair {
    signing_key: SigningKey,
    public_key: Ed25519PublicKey,
}

impl Ed25519KeyPair {
    /// Generate a fresh pair from the OS RNG.
    pub fn from_random() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        let public_key = Ed25519PublicKey::from_bytes(signing_key.verifying_key().to_bytes());
        tracing::debug!(algorithm = %KeyType::Ed25519, "generated key pair");
        Self {
            signing_key,
            public_key,
        }
    }

    /// Rebuild from a decoded 64-byte secret blob (seed ‖ public key).
    ///
    /// The public half is re-derived from the seed; a blob whose trailing
    /// 32 bytes disagree is rejected rather than trusted.
    pub(crate) fn from_secret_bytes(blob: &[u8]) -> Result<Self, KeyError> {
        let expected = KeyType::Ed25519.secret_key_len();
        if blob.len() != expected {
            return Err(KeyError::InvalidKeyFormat(format!(
                "ed25519 secret key must decode to {} bytes, got {}",
                expected,
                blob.len()
            )));
        }
        let mut keypair_bytes = [0u8; 64];
        keypair_bytes.copy_from_slice(blob);
        let signing_key = SigningKey::from_keypair_bytes(&keypair_bytes).map_err(|_| {
            KeyError::InvalidKeyFormat(
                "ed25519 secret key's public half does not match its seed".to_string(),
            )
        })?;
        let public_key = Ed25519PublicKey::from_bytes(signing_key.verifying_key().to_bytes());
        Ok(Self {
            signing_key,
            public_key,
        })
    }

    pub fn public_key(&self) -> &Ed25519PublicKey {
        &self.public_key
    }

    /// Sign a message. Deterministic (RFC 8032): same key and message,
    /// same signature.
    pub fn sign(&self, message: &[u8]) -> Signature {
        let sig = self.signing_key.sign(message);
        Signature::new(
            sig.to_bytes().to_vec(),
            PublicKey::Ed25519(self.public_key.clone()),
        )
    }

    fn secret_blob(&self) -> Vec<u8> {
        self.signing_key.to_keypair_bytes().to_vec()
    }
}

/// A Falcon-512 signing identity.
pub struct Falcon512KeyPair {
    secret_key: falcon512::SecretKey,
    public_key: Falcon512PublicKey,
}

impl Falcon512KeyPair {
    /// Generate a fresh pair. Entropy is drawn by the Falcon backend itself.
    pub fn from_random() -> Self {
        let (pk, sk) = falcon512::keypair();
        let public_key = Falcon512PublicKey::from_vec(pk.as_bytes().to_vec());
        tracing::debug!(algorithm = %KeyType::Falcon512, "generated key pair");
        Self {
            secret_key: sk,
            public_key,
        }
    }

    /// Rebuild from a decoded secret blob (secret key ‖ public key).
    ///
    /// The two halves arrive as one opaque payload, so a corrupted or
    /// mismatched blob is detected by signing and verifying a probe message
    /// before the pair is accepted.
    pub(crate) fn from_secret_bytes(blob: &[u8]) -> Result<Self, KeyError> {
        let expected = KeyType::Falcon512.secret_key_len();
        if blob.len() != expected {
            return Err(KeyError::InvalidKeyFormat(format!(
                "falcon512 secret key must decode to {} bytes, got {}",
                expected,
                blob.len()
            )));
        }
        let split = falcon512::secret_key_bytes();
        let secret_key = falcon512::SecretKey::from_bytes(&blob[..split]).map_err(|_| {
            KeyError::InvalidKeyFormat("falcon512 secret key bytes are malformed".to_string())
        })?;
        let public_key = Falcon512PublicKey::try_from_slice(&blob[split..])?;

        // Sign/verify probe: the only way to prove the halves belong together.
        let probe = falcon512::detached_sign(b"key pair consistency check", &secret_key);
        if !public_key.verify(b"key pair consistency check", probe.as_bytes())? {
            return Err(KeyError::InvalidKeyFormat(
                "falcon512 secret and public halves do not form a valid pair".to_string(),
            ));
        }
        Ok(Self {
            secret_key,
            public_key,
        })
    }

    pub fn public_key(&self) -> &Falcon512PublicKey {
        &self.public_key
    }

    /// Sign a message. Falcon signing is randomized; two signatures over the
    /// same message will differ, and both will verify.
    pub fn sign(&self, message: &[u8]) -> Signature {
        let sig = falcon512::detached_sign(message, &self.secret_key);
        Signature::new(
            sig.as_bytes().to_vec(),
            PublicKey::Falcon512(self.public_key.clone()),
        )
    }

    fn secret_blob(&self) -> Vec<u8> {
        let mut blob = Vec::with_capacity(KeyType::Falcon512.secret_key_len());
        blob.extend_from_slice(self.secret_key.as_bytes());
        blob.extend_from_slice(self.public_key.as_bytes());
        blob
    }
}

/// A signing identity of any supported algorithm.
///
/// # Examples
///
/// ```
/// use helix_keys::KeyPair;
///
/// let kp = KeyPair::from_random("falcon512").unwrap();
/// let sig = kp.sign(b"attach me to a transaction");
/// assert!(kp.verify(b"attach me to a transaction", sig.as_bytes()).unwrap());
///
/// // The canonical string form round-trips, secret and all.
/// let restored: KeyPair = kp.to_string().parse().unwrap();
/// assert_eq!(restored.public_key(), kp.public_key());
/// ```
pub enum KeyPair {
    Ed25519(Ed25519KeyPair),
    Falcon512(Falcon512KeyPair),
}

impl KeyPair {
    /// Generate a fresh pair for the named algorithm.
    ///
    /// The name is matched case-insensitively against the registry;
    /// anything unrecognized is [`KeyError::UnknownAlgorithm`].
    pub fn from_random(algorithm: &str) -> Result<Self, KeyError> {
        match KeyType::from_name(algorithm)? {
            KeyType::Ed25519 => Ok(KeyPair::Ed25519(Ed25519KeyPair::from_random())),
            KeyType::Falcon512 => Ok(KeyPair::Falcon512(Falcon512KeyPair::from_random())),
        }
    }

    /// Which algorithm this pair signs with.
    pub fn key_type(&self) -> KeyType {
        match self {
            KeyPair::Ed25519(_) => KeyType::Ed25519,
            KeyPair::Falcon512(_) => KeyType::Falcon512,
        }
    }

    /// The public key derived at construction. No recomputation.
    pub fn public_key(&self) -> PublicKey {
        match self {
            KeyPair::Ed25519(kp) => PublicKey::Ed25519(kp.public_key().clone()),
            KeyPair::Falcon512(kp) => PublicKey::Falcon512(kp.public_key().clone()),
        }
    }

    /// Produce a detached signature over `message`.
    pub fn sign(&self, message: &[u8]) -> Signature {
        match self {
            KeyPair::Ed25519(kp) => kp.sign(message),
            KeyPair::Falcon512(kp) => kp.sign(message),
        }
    }

    /// Convenience: verify against this pair's own public key.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool, KeyError> {
        match self {
            KeyPair::Ed25519(kp) => kp.public_key().verify(message, signature),
            KeyPair::Falcon512(kp) => kp.public_key().verify(message, signature),
        }
    }

    fn secret_blob(&self) -> Vec<u8> {
        match self {
            KeyPair::Ed25519(kp) => kp.secret_blob(),
            KeyPair::Falcon512(kp) => kp.secret_blob(),
        }
    }
}

impl FromStr for KeyPair {
    type Err = KeyError;

    /// Parse a canonical secret string. The bare single-segment form is an
    /// Ed25519 secret only — the legacy exception never extends to Falcon.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (key_type, payload) = split_encoded(value)?;
        let blob = base_decode(payload)?;
        match key_type {
            KeyType::Ed25519 => Ok(KeyPair::Ed25519(Ed25519KeyPair::from_secret_bytes(&blob)?)),
            KeyType::Falcon512 => Ok(KeyPair::Falcon512(Falcon512KeyPair::from_secret_bytes(
                &blob,
            )?)),
        }
    }
}

impl TryFrom<&str> for KeyPair {
    type Error = KeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for KeyPair {
    /// `<algo>:<base58(secret blob)>`. This string IS the secret — treat it
    /// like one.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key_type(), base_encode(&self.secret_blob()))
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Public key only. The secret stays out of logs, panics, and
        // anything else Debug output ends up in.
        write!(f, "KeyPair({:?})", self.public_key())
    }
}
