//! Fixed-width base62 codec for the numeric identifier.
//!
//! The numeric identifier is the trailing 8 characters of the 15 character
//! form. Digits are ordered `0-9`, `A-Z`, `a-z` and the most significant
//! digit comes first.

use crate::IdError;

/// Digits of the numeric identifier, in value order.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Width of an encoded numeric identifier.
pub const NUMERIC_WIDTH: usize = 8;

/// Exclusive upper bound for numeric identifiers (62^8).
pub const MAX_IDENTIFIER_VALUE: u64 = 218_340_105_584_896;

const BASE: u64 = 62;
const ZERO: &str = "00000000";
const MAX: &str = "zzzzzzzz";

/// Encodes `value` as an 8 character numeric identifier.
///
/// Returns [`IdError::ValueTooLarge`] if `value` is not below
/// [`MAX_IDENTIFIER_VALUE`].
pub fn encode(value: u64) -> Result<String, IdError> {
    match value {
        0 => return Ok(ZERO.to_string()),
        v if v == MAX_IDENTIFIER_VALUE - 1 => return Ok(MAX.to_string()),
        v if v >= MAX_IDENTIFIER_VALUE => return Err(IdError::ValueTooLarge { value }),
        _ => {}
    }

    let mut out = [b'0'; NUMERIC_WIDTH];
    let mut rest = value;
    let mut place = MAX_IDENTIFIER_VALUE / BASE;
    for digit in out.iter_mut() {
        let d = rest / place;
        *digit = ALPHABET[d as usize];
        rest -= d * place;
        place /= BASE;
    }

    // Every byte comes from ALPHABET.
    Ok(out.iter().map(|&b| b as char).collect())
}

/// Decodes an 8 character numeric identifier.
///
/// Returns [`IdError::InvalidNumericIdentifier`] if `src` is not exactly 8
/// bytes or contains a byte outside [`ALPHABET`].
pub fn decode(src: &[u8]) -> Result<u64, IdError> {
    if src.len() != NUMERIC_WIDTH {
        return Err(IdError::InvalidNumericIdentifier);
    }

    src.iter().try_fold(0u64, |acc, &b| {
        digit_value(b)
            .map(|d| acc * BASE + d)
            .ok_or(IdError::InvalidNumericIdentifier)
    })
}

fn digit_value(b: u8) -> Option<u64> {
    let d = match b {
        b'0'..=b'9' => b - b'0',
        b'A'..=b'Z' => b - b'A' + 10,
        b'a'..=b'z' => b - b'a' + 36,
        _ => return None,
    };
    Some(u64::from(d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_boundaries() {
        assert_eq!(encode(0).unwrap(), "00000000");
        assert_eq!(encode(MAX_IDENTIFIER_VALUE - 1).unwrap(), "zzzzzzzz");
        assert_eq!(
            encode(MAX_IDENTIFIER_VALUE),
            Err(IdError::ValueTooLarge {
                value: MAX_IDENTIFIER_VALUE
            })
        );
        assert!(encode(u64::MAX).is_err());
    }

    #[test]
    fn test_encode_known_values() {
        assert_eq!(encode(5).unwrap(), "00000005");
        assert_eq!(encode(15).unwrap(), "0000000F");
        assert_eq!(encode(30).unwrap(), "0000000U");
        assert_eq!(encode(45).unwrap(), "0000000j");
        assert_eq!(encode(61).unwrap(), "0000000z");
        assert_eq!(encode(1024).unwrap(), "000000GW");
        assert_eq!(encode(10_241_024).unwrap(), "0000gy9o");
        assert_eq!(encode(109_170_052_792_448).unwrap(), "V0000000");
    }

    #[test]
    fn test_decode_known_values() {
        assert_eq!(decode(b"0000gy9o").unwrap(), 10_241_024);
        assert_eq!(decode(b"000000GW").unwrap(), 1024);
        assert_eq!(decode(b"00000000").unwrap(), 0);
        assert_eq!(decode(b"zzzzzzzz").unwrap(), MAX_IDENTIFIER_VALUE - 1);
    }

    #[test]
    fn test_decode_wrong_length() {
        assert_eq!(decode(b""), Err(IdError::InvalidNumericIdentifier));
        assert_eq!(decode(b"0000000GW"), Err(IdError::InvalidNumericIdentifier));
        assert_eq!(decode(b"0000000000"), Err(IdError::InvalidNumericIdentifier));
        // "ßßßß" is eight bytes of UTF-8, none of them base62 digits.
        assert_eq!(
            decode("ßßßß".as_bytes()),
            Err(IdError::InvalidNumericIdentifier)
        );
    }

    #[test]
    fn test_decode_invalid_digit() {
        assert_eq!(decode(b"0000-000"), Err(IdError::InvalidNumericIdentifier));
        assert_eq!(decode(b"zzzzzzz "), Err(IdError::InvalidNumericIdentifier));
    }

    proptest! {
        #[test]
        fn prop_decode_inverts_encode(v in 0..MAX_IDENTIFIER_VALUE) {
            let encoded = encode(v).unwrap();
            prop_assert_eq!(encoded.len(), NUMERIC_WIDTH);
            prop_assert_eq!(decode(encoded.as_bytes()).unwrap(), v);
        }

        #[test]
        fn prop_encode_inverts_decode(s in "[0-9A-Za-z]{8}") {
            let v = decode(s.as_bytes()).unwrap();
            prop_assert_eq!(encode(v).unwrap(), s);
        }
    }
}
