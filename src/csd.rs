use crate::decoder::{decode_to_parts, DecodedCsd};
use crate::digit::Digit;
use crate::encoder::{encode_fixed_nonzero, encode_places};
use crate::error::{DecodeError, EncodeResult};
use std::fmt;
use std::str::FromStr;

/// A validated CSD string
///
/// The text is kept exactly as produced or parsed, so equality is textual: `"+0"` and
/// `"+0.0"` are different [`Csd`] values even though both decode to 2.
///
/// Parsing only checks the alphabet and the single point. Use
/// [`is_canonical()`](Self::is_canonical) to check the non-adjacency property of
/// strings that did not come from the encoders.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Csd {
    text: String,
}

impl Csd {
    /// Encode `value` with exactly `places` fractional digits
    ///
    /// # Errors
    ///
    /// See [`encode_places`].
    pub fn from_places(value: f64, places: usize) -> EncodeResult<Self> {
        encode_places(value, places).map(|text| Self { text })
    }

    /// Encode `value` with at most `max_nonzero` non-zero digits
    ///
    /// # Errors
    ///
    /// See [`encode_fixed_nonzero`].
    pub fn from_nonzero_budget(value: f64, max_nonzero: usize) -> EncodeResult<Self> {
        encode_fixed_nonzero(value, max_nonzero).map(|text| Self { text })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// Digits in order, skipping the point
    pub fn digits(&self) -> impl Iterator<Item = Digit> + '_ {
        self.text.chars().filter_map(Digit::from_symbol)
    }

    /// Split into digits and point position
    #[must_use]
    pub fn decode(&self) -> DecodedCsd {
        DecodedCsd::from_validated(&self.text)
    }

    /// The real value this string encodes
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.decode().value()
    }

    /// Number of `+` and `-` digits, i.e. the adders/subtractors a constant multiplier needs
    #[must_use]
    pub fn nonzero_count(&self) -> usize {
        self.decode().nonzero_count()
    }

    /// Number of digits right of the point
    #[must_use]
    pub fn fraction_digits(&self) -> usize {
        self.decode().fraction_digits
    }

    /// Number of digits left of the point
    #[must_use]
    pub fn integer_digits(&self) -> usize {
        self.decode().integer_digits()
    }

    /// Check that no two adjacent digits are both non-zero. The point does not separate
    /// digits: `"+.+"` is not canonical.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.decode().is_canonical()
    }
}

impl FromStr for Csd {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_to_parts(s)?;
        Ok(Self { text: s.to_owned() })
    }
}

impl TryFrom<&str> for Csd {
    type Error = DecodeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Csd> for String {
    fn from(csd: Csd) -> Self {
        csd.text
    }
}

impl AsRef<str> for Csd {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Csd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
