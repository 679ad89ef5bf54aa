//! # Text Codec
//!
//! Base58 byte encoding plus the `<algorithm>:<payload>` segment format that
//! public keys, secret keys, and (by the surrounding system's convention)
//! signatures all share.
//!
//! Base58 because these strings get read aloud, typed from paper backups,
//! and pasted into terminals. No `0`/`O`/`I`/`l` confusion, no `+/=` URL
//! mangling. The codec knows nothing about algorithms — it moves bytes.

use crate::errors::KeyError;
use crate::key_type::KeyType;

/// Encode a byte buffer as base58 (Bitcoin alphabet).
///
/// Deterministic, and exact under [`base_decode`]: leading zero bytes become
/// leading `1`s and survive the round trip.
pub fn base_encode(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

/// Decode a base58 string back into bytes.
///
/// Any character outside the alphabet fails with [`KeyError::DecodeError`].
pub fn base_decode(value: &str) -> Result<Vec<u8>, KeyError> {
    Ok(bs58::decode(value).into_vec()?)
}

/// Split a canonical `<algorithm>:<payload>` string into its key type and
/// raw (still-encoded) payload.
///
/// One segment is the legacy bare form and means Ed25519 — that exception is
/// frozen; new algorithms never get a bare alias. Two segments go through
/// the registry, so an unknown prefix is [`KeyError::UnknownAlgorithm`].
/// Anything with more colons is malformed.
pub(crate) fn split_encoded(value: &str) -> Result<(KeyType, &str), KeyError> {
    let parts: Vec<&str> = value.split(':').collect();
    match parts.as_slice() {
        [payload] => Ok((KeyType::Ed25519, payload)),
        [name, payload] => Ok((KeyType::from_name(name)?, payload)),
        _ => Err(KeyError::InvalidKeyFormat(format!(
            "expected `<algorithm>:<payload>`, got {} segments",
            parts.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_is_exact() {
        let cases: &[&[u8]] = &[
            b"",
            b"\x00",
            b"\x00\x00\x01",
            b"hello",
            &[0xff; 64],
            &[0u8, 1, 2, 3, 254, 255],
        ];
        for bytes in cases {
            assert_eq!(base_decode(&base_encode(bytes)).unwrap(), *bytes);
        }
    }

    #[test]
    fn known_vectors() {
        assert_eq!(base_encode(b"hello"), "Cn8eVZg");
        assert_eq!(base_encode(&[0]), "1");
        assert_eq!(base_decode("Cn8eVZg").unwrap(), b"hello");
    }

    #[test]
    fn rejects_characters_outside_the_alphabet() {
        // The four lookalikes base58 exists to avoid, plus punctuation.
        for bad in ["0", "O", "I", "l", "abc!", "a b"] {
            assert!(matches!(base_decode(bad), Err(KeyError::DecodeError(_))));
        }
    }

    #[test]
    fn bare_form_defaults_to_ed25519() {
        let (kt, payload) = split_encoded("Cn8eVZg").unwrap();
        assert_eq!(kt, KeyType::Ed25519);
        assert_eq!(payload, "Cn8eVZg");
    }

    #[test]
    fn tagged_form_goes_through_the_registry() {
        let (kt, payload) = split_encoded("falcon512:Cn8eVZg").unwrap();
        assert_eq!(kt, KeyType::Falcon512);
        assert_eq!(payload, "Cn8eVZg");

        // Case-insensitive on the name, like everything else in the registry.
        let (kt, _) = split_encoded("ED25519:Cn8eVZg").unwrap();
        assert_eq!(kt, KeyType::Ed25519);
    }

    #[test]
    fn unknown_prefix_is_unknown_algorithm() {
        assert!(matches!(
            split_encoded("rsa:AAAA"),
            Err(KeyError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn extra_segments_are_invalid_format() {
        assert!(matches!(
            split_encoded("bogus:bogus:bogus"),
            Err(KeyError::InvalidKeyFormat(_))
        ));
        assert!(matches!(
            split_encoded("ed25519:abc:"),
            Err(KeyError::InvalidKeyFormat(_))
        ));
    }
}
