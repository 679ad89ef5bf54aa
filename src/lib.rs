// Copyright (c) 2026 Helix Labs. MIT License.

//! # Helix Keys
//!
//! Multi-algorithm signing identities for the Helix network: one uniform
//! `PublicKey` / `KeyPair` surface over two deliberately different signature
//! schemes, with a canonical, human-transcribable text encoding shared by
//! keys and signatures.
//!
//! The two schemes:
//!
//! - **Ed25519** — the default. Small, fast, deterministic, boring in the
//!   best possible way.
//! - **Falcon-512** — the post-quantum option. Lattice-based, NIST-selected,
//!   and bulky, for identities that need to outlive Shor's algorithm.
//!
//! Everything encodes as `<algorithm>:<base58-payload>`. Ed25519 additionally
//! accepts the historical bare form with no prefix — an exception that is
//! frozen and will not be extended to any other algorithm.
//!
//! ## Architecture
//!
//! Leaves first:
//!
//! - **serialize** — base58 codec and `<algo>:<payload>` splitting.
//! - **key_type** — the closed algorithm registry: names, wire tags,
//!   expected buffer shapes, and the binding to each native backend.
//! - **public_key** — the verification side. `verify` dispatches on the
//!   variant and nowhere else; algorithm confusion is a compile error here,
//!   not a CVE.
//! - **key_pair** — the signing side: random generation, reconstruction
//!   from a canonical secret string, and detached signing.
//!
//! Every value is immutable after construction and safe to share across
//! threads. The only side effect in the whole crate is reading OS entropy
//! during key generation.
//!
//! ## Quick start
//!
//! ```
//! use helix_keys::{KeyPair, PublicKey};
//!
//! let kp = KeyPair::from_random("ed25519").unwrap();
//! let sig = kp.sign(b"hello, helix");
//!
//! // Ship the public key as text, bring it back, verify.
//! let pk: PublicKey = kp.public_key().to_string().parse().unwrap();
//! assert!(pk.verify(b"hello, helix", sig.as_bytes()).unwrap());
//! ```

pub mod errors;
pub mod key_pair;
pub mod key_type;
pub mod public_key;
pub mod serialize;

// Re-export the types people actually need so they don't have to memorize
// the module hierarchy.
pub use errors::KeyError;
pub use key_pair::{Ed25519KeyPair, Falcon512KeyPair, KeyPair, Signature};
pub use key_type::KeyType;
pub use public_key::{Ed25519PublicKey, Falcon512PublicKey, PublicKey};
