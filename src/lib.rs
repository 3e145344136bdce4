//! # csd
//!
//! Conversion between real numbers and **Canonical Signed Digit** (CSD) strings.
//!
//! CSD is a radix-2 positional notation whose digits are -1, 0 and +1, written `-`, `0`
//! and `+`, with an optional `.` between the integer and fractional digits. No two
//! adjacent digits are ever both non-zero, which makes it the signed-digit form with the
//! fewest non-zero terms. In DSP hardware each non-zero digit of a multiplier constant
//! costs one adder or subtractor, so CSD coefficients give the cheapest shift-and-add
//! multipliers.
//!
//! ## Examples
//!
//! ```rust
//! use csd::{decode, encode_fixed_nonzero, encode_places};
//!
//! // 28.5 = 32 - 4 + 0.5
//! assert_eq!(encode_places(28.5, 2).unwrap(), "+00-00.+0");
//! assert_eq!(decode("+00-00.+").unwrap(), 28.5);
//!
//! // Stop as soon as the value is exact or the non-zero budget is spent
//! assert_eq!(encode_fixed_nonzero(28.5, 4).unwrap(), "+00-00.+");
//! assert_eq!(encode_fixed_nonzero(28.5, 2).unwrap(), "+00-00");
//!
//! // Malformed input is a typed error
//! assert!(decode("+0x-").is_err());
//! ```
//!
//! The [`Csd`] type wraps a validated string and answers questions about it:
//!
//! ```rust
//! use csd::Csd;
//!
//! let coefficient = Csd::from_places(0.3, 8).unwrap();
//! assert!(coefficient.is_canonical());
//! assert!(coefficient.nonzero_count() <= 4);
//! assert!((coefficient.to_f64() - 0.3).abs() <= 1.0 / 512.0);
//! ```
//!
//! ## Tracing
//!
//! The `_with` encoders take [`EncodeOptions`]. With `trace` set, every digit decision is
//! reported as a `DEBUG` [`tracing`](https://docs.rs/tracing) event carrying the digit
//! position, the weight and the residual left after the digit.

pub(crate) mod csd;
pub(crate) mod decoder;
pub(crate) mod digit;
pub(crate) mod encoder;
pub(crate) mod error;

// Re-export main types and functions
pub use csd::Csd;
pub use decoder::{decode, decode_to_parts, DecodedCsd};
pub use digit::{is_non_adjacent, Digit};
pub use encoder::{
    encode_fixed_nonzero, encode_fixed_nonzero_with, encode_places, encode_places_with,
    EncodeOptions, NEGLIGIBLE_RESIDUAL,
};
pub use error::{DecodeError, DecodeResult, EncodeError, EncodeResult};
