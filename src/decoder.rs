//! Decoding logic for CSD strings
//!
//! A CSD string is read left to right as a radix-2 positional number whose digits are
//! -1, 0 or +1. The optional point fixes how many of the trailing digits are fractional.

use crate::digit::{is_non_adjacent, pow2, Digit};
use crate::error::{DecodeError, DecodeResult};

/// Structural parse of a CSD string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedCsd {
    pub digits: Vec<Digit>,
    pub has_point: bool,
    /// Number of digits right of the point (0 when there is no point)
    pub fraction_digits: usize,
}

impl DecodedCsd {
    /// Split an already validated CSD string without re-checking its characters
    pub(crate) fn from_validated(csd: &str) -> Self {
        let digits: Vec<Digit> = csd.chars().filter_map(Digit::from_symbol).collect();
        let fraction_digits = csd.find('.').map_or(0, |at| csd.len() - at - 1);
        Self {
            digits,
            has_point: csd.contains('.'),
            fraction_digits,
        }
    }

    /// Evaluate the digits as a real number
    #[must_use]
    pub fn value(&self) -> f64 {
        evaluate(&self.digits, self.fraction_digits)
    }

    /// Number of `+` and `-` digits
    #[must_use]
    pub fn nonzero_count(&self) -> usize {
        self.digits.iter().filter(|d| d.is_nonzero()).count()
    }

    /// Number of digits left of the point
    #[must_use]
    pub fn integer_digits(&self) -> usize {
        self.digits.len() - self.fraction_digits
    }

    /// No two adjacent digits are both non-zero; the point does not separate digits
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        is_non_adjacent(self.digits.iter().copied())
    }
}

/// Parse a CSD string into its digits and point position
///
/// # Errors
///
/// Returns [`DecodeError::InvalidDigit`] for any character other than `+`, `-`, `0` and `.`,
/// and [`DecodeError::MultiplePoints`] if a second `.` appears.
pub fn decode_to_parts(csd: &str) -> DecodeResult<DecodedCsd> {
    let mut digits = Vec::with_capacity(csd.len());
    let mut point_at = None;

    for (position, character) in csd.chars().enumerate() {
        if character == '.' {
            if point_at.is_some() {
                return Err(DecodeError::MultiplePoints { position });
            }
            point_at = Some(digits.len());
            continue;
        }
        let digit = Digit::from_symbol(character)
            .ok_or(DecodeError::InvalidDigit { character, position })?;
        digits.push(digit);
    }

    let fraction_digits = point_at.map_or(0, |at| digits.len() - at);
    Ok(DecodedCsd {
        digits,
        has_point: point_at.is_some(),
        fraction_digits,
    })
}

/// Convert a CSD string to the real value it encodes
///
/// The empty string decodes to `0.0`.
///
/// # Errors
///
/// See [`decode_to_parts`].
pub fn decode(csd: &str) -> DecodeResult<f64> {
    decode_to_parts(csd).map(|parts| parts.value())
}

/// Sum the non-zero digits from the least significant up, each as an exact power of two.
///
/// No power of two is formed beyond what the digit itself weighs, so long fractions neither
/// overflow the scale nor flush representable subnormals to zero.
pub(crate) fn evaluate(digits: &[Digit], fraction_digits: usize) -> f64 {
    let lowest = -i64::try_from(fraction_digits).unwrap_or(i64::MAX);
    digits
        .iter()
        .rev()
        .zip(lowest..)
        .filter(|(digit, _)| digit.is_nonzero())
        .fold(0.0_f64, |acc, (digit, exponent)| {
            acc + f64::from(digit.value()) * pow2(exponent)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_integer() {
        assert_eq!(decode("+00-00").unwrap(), 28.0);
        assert_eq!(decode("-0+").unwrap(), -3.0);
        assert_eq!(decode("0").unwrap(), 0.0);
    }

    #[test]
    fn test_decode_fraction() {
        assert_eq!(decode("+00-00.+").unwrap(), 28.5);
        assert_eq!(decode("0.-").unwrap(), -0.5);
        assert_eq!(decode("0.0+").unwrap(), 0.25);
    }

    #[test]
    fn test_trailing_point_has_no_fraction() {
        let parts = decode_to_parts("+0-.").unwrap();
        assert!(parts.has_point);
        assert_eq!(parts.fraction_digits, 0);
        assert_eq!(parts.value(), 3.0);
    }

    #[test]
    fn test_leading_point() {
        let parts = decode_to_parts(".+0+").unwrap();
        assert_eq!(parts.integer_digits(), 0);
        assert_eq!(parts.fraction_digits, 3);
        assert_eq!(parts.value(), 0.625);
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(decode("").unwrap(), 0.0);
    }

    #[test]
    fn test_non_canonical_input_accepted() {
        // Adjacent non-zero digits are still a valid signed-digit number
        assert_eq!(decode("++").unwrap(), 3.0);
    }

    #[test]
    fn test_invalid_digit() {
        assert_eq!(
            decode("+0x-"),
            Err(DecodeError::InvalidDigit {
                character: 'x',
                position: 2
            })
        );
        assert!(matches!(
            decode("1.0"),
            Err(DecodeError::InvalidDigit { character: '1', .. })
        ));
    }

    #[test]
    fn test_multiple_points() {
        assert_eq!(
            decode("+.0."),
            Err(DecodeError::MultiplePoints { position: 3 })
        );
    }

    #[test]
    fn test_nonzero_count() {
        let parts = decode_to_parts("+00-00.+0").unwrap();
        assert_eq!(parts.nonzero_count(), 3);
        assert_eq!(parts.integer_digits(), 6);
        assert_eq!(parts.fraction_digits, 2);
    }

    #[test]
    fn test_long_fraction_of_zeros() {
        let csd = format!("+.{}", "0".repeat(1100));
        assert_eq!(decode(&csd).unwrap(), 1.0);
    }

    #[test]
    fn test_subnormal_fraction() {
        let csd = format!("0.{}+", "0".repeat(1070));
        // 2^-1071
        assert_eq!(decode(&csd).unwrap(), f64::from_bits(1 << 3));
    }

    #[test]
    fn test_long_fraction_beyond_precision() {
        // 1 + 2^-1100 rounds to 1; a Horner accumulator over all digits would overflow
        let csd = format!("+.{}+", "0".repeat(1099));
        assert_eq!(decode(&csd).unwrap(), 1.0);
    }

    #[test]
    fn test_from_validated_matches_decode_to_parts() {
        for csd in ["+00-00.+0", "0.-", "+0-", ".+0+", "+0-.", ""] {
            assert_eq!(
                DecodedCsd::from_validated(csd),
                decode_to_parts(csd).unwrap(),
                "{csd:?}"
            );
        }
    }
}
