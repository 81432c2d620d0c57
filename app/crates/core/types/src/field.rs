//! Field element helpers
//!
//! Conversion between BN254 scalars and the byte/hex forms used on the wire.
//! All byte arrays are Big-Endian, as expected by the native proving system.

use ark_ff::{BigInteger, PrimeField};

use crate::{constants::FIELD_SIZE, error::DecodeError};

/// BN254 scalar field element
pub type Fr = ark_bn254::Fr;

/// Convert a field element to its canonical 32-byte Big-Endian encoding
pub fn fr_to_be_bytes(fr: &Fr) -> [u8; FIELD_SIZE] {
    let mut out = [0u8; FIELD_SIZE];
    let bytes = fr.into_bigint().to_bytes_be();
    // BigInt<4> always yields exactly 32 bytes
    out.copy_from_slice(&bytes);
    out
}

/// Convert Big-Endian bytes to a field element
///
/// Rejects anything that is not exactly [`FIELD_SIZE`] bytes, as well as
/// encodings of values greater than or equal to the field modulus.
pub fn fr_from_be_bytes(bytes: &[u8]) -> Result<Fr, DecodeError> {
    if bytes.len() != FIELD_SIZE {
        return Err(DecodeError::InvalidFieldLength(bytes.len()));
    }
    let fr = Fr::from_be_bytes_mod_order(bytes);
    if fr_to_be_bytes(&fr).as_slice() != bytes {
        return Err(DecodeError::NonCanonicalField);
    }
    Ok(fr)
}

/// Convert a field element to a `0x`-prefixed Big-Endian hex string
pub fn fr_to_hex(fr: &Fr) -> String {
    format!("0x{}", hex::encode(fr_to_be_bytes(fr)))
}

/// Convert a hex string (with or without `0x`) to a field element
///
/// Short strings are left-padded with zeros.
pub fn fr_from_hex(hex: &str) -> Result<Fr, DecodeError> {
    let hex = hex.strip_prefix("0x").unwrap_or(hex);
    let width = FIELD_SIZE.saturating_mul(2);
    if hex.len() > width {
        return Err(DecodeError::InvalidHex(
            hex::FromHexError::InvalidStringLength,
        ));
    }
    let padded = format!("{hex:0>width$}");
    let bytes = hex::decode(padded)?;
    fr_from_be_bytes(&bytes)
}

/// Serde adapter storing field elements as hex strings
///
/// Use with `#[serde(with = "crate::field::serde_fr")]`.
pub mod serde_fr {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{Fr, fr_from_hex, fr_to_hex};

    /// Serialize a field element as a hex string
    pub fn serialize<S: Serializer>(fr: &Fr, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&fr_to_hex(fr))
    }

    /// Deserialize a field element from a hex string
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Fr, D::Error> {
        let hex = String::deserialize(deserializer)?;
        fr_from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::{One, Zero};
    use ark_std::{UniformRand, test_rng};

    #[test]
    fn test_small_values_are_big_endian() {
        let bytes = fr_to_be_bytes(&Fr::from(0x0102u64));
        assert_eq!(bytes[FIELD_SIZE - 2..], [0x01, 0x02]);
        assert!(bytes[..FIELD_SIZE - 2].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_bytes_round_trip_random() {
        let mut rng = test_rng();
        for _ in 0..32 {
            let fr = Fr::rand(&mut rng);
            assert_eq!(fr_from_be_bytes(&fr_to_be_bytes(&fr)).unwrap(), fr);
        }
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert_eq!(
            fr_from_be_bytes(&[0u8; 31]),
            Err(DecodeError::InvalidFieldLength(31))
        );
        assert_eq!(
            fr_from_be_bytes(&[0u8; 33]),
            Err(DecodeError::InvalidFieldLength(33))
        );
    }

    #[test]
    fn test_non_canonical_rejected() {
        // Modulus itself reduces to zero, so its encoding is not canonical
        let modulus = Fr::MODULUS.to_bytes_be();
        assert_eq!(fr_from_be_bytes(&modulus), Err(DecodeError::NonCanonicalField));
        assert_eq!(
            fr_from_be_bytes(&[0xffu8; FIELD_SIZE]),
            Err(DecodeError::NonCanonicalField)
        );
    }

    #[test]
    fn test_hex_round_trip_and_padding() {
        assert_eq!(fr_from_hex("0x1").unwrap(), Fr::one());
        assert_eq!(fr_from_hex("").unwrap(), Fr::zero());
        assert_eq!(fr_from_hex("ff").unwrap(), Fr::from(255u64));

        let fr = Fr::from(123_456_789u64);
        let hex = fr_to_hex(&fr);
        assert_eq!(hex.len(), 2 + 64);
        assert_eq!(fr_from_hex(&hex).unwrap(), fr);
    }

    #[test]
    fn test_hex_errors() {
        let too_long = "1".repeat(65);
        assert!(matches!(
            fr_from_hex(&too_long),
            Err(DecodeError::InvalidHex(_))
        ));
        assert!(matches!(fr_from_hex("0xzz"), Err(DecodeError::InvalidHex(_))));
    }
}
