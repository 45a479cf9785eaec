//! Hex string helpers
//!
//! Tag identifiers cross the API boundary as uppercase hex strings with no
//! separators, two digits per byte. Decoding accepts either case.

use crate::error::Result;

/// Encode bytes as an uppercase hex string
///
/// # Examples
///
/// ```
/// use vf747_core::hexstr;
///
/// assert_eq!(hexstr::encode(&[0xE2, 0x00, 0x34]), "E20034");
/// ```
pub fn encode(data: &[u8]) -> String {
    hex::encode_upper(data)
}

/// Decode a hex string (case-insensitive) back into bytes
///
/// # Errors
///
/// Fails on odd-length input or non-hex characters.
pub fn decode(s: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(s)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_uppercase() {
        let s = encode(&[0xab, 0xcd, 0x0f]);
        assert_eq!(s, "ABCD0F");
        assert_eq!(s.len() % 2, 0);
    }

    #[test]
    fn test_decode_case_insensitive() {
        assert_eq!(decode("e200abCD").unwrap(), vec![0xE2, 0x00, 0xAB, 0xCD]);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode("zz").is_err());
        assert!(decode("abc").is_err());
    }

    proptest! {
        #[test]
        fn prop_round_trip(data in proptest::collection::vec(any::<u8>(), 0..64)) {
            let s = encode(&data);
            prop_assert_eq!(s.len(), data.len() * 2);
            prop_assert_eq!(decode(&s).unwrap(), data);
        }
    }
}
