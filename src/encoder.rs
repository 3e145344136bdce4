//! Encoding logic for CSD strings
//!
//! Both encoders run the same greedy recurrence. At each position with weight `w` the
//! residual `r` is compared as `1.5 * r` against `±w`: above emits `+`, below emits `-`,
//! otherwise `0`. Scaling by 1.5 keeps the residual inside `±(4/3)·w`, so a non-zero
//! digit is always followed by a zero and the output never has adjacent non-zero digits.

use crate::digit::{pow2, Digit};
use crate::error::{EncodeError, EncodeResult};

/// Residual magnitude below which [`encode_fixed_nonzero`] stops emitting fractional digits.
pub const NEGLIGIBLE_RESIDUAL: f64 = 1e-100;

/// Options shared by the encoders
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Emit one `DEBUG` tracing event per digit with the residual and weight
    pub trace: bool,
}

impl EncodeOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self { trace: false }
    }

    #[must_use]
    pub const fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}

/// Running state of the signed-digit recurrence.
struct Recurrence {
    /// Position of the next digit plus one; the point sits where this reaches 0
    position: i64,
    residual: f64,
    weight: f64,
    /// Magnitudes with `1.5 * |value| <= 1` start with an explicit `0` integer digit
    leading_zero: bool,
    trace: bool,
}

impl Recurrence {
    fn start(value: f64, options: &EncodeOptions) -> EncodeResult<Self> {
        if !value.is_finite() {
            return Err(EncodeError::NonFinite(value));
        }
        let magnitude = value.abs();
        let scaled = magnitude * 1.5;
        if !scaled.is_finite() {
            return Err(EncodeError::OutOfRange(value));
        }

        // `scaled` is finite, so log2 is below 1024 and the cast cannot truncate
        #[allow(clippy::cast_possible_truncation)]
        let (position, leading_zero) = if exceeds(magnitude, 1.0) {
            let mut position = scaled.log2().ceil() as i64;
            // `scaled` is rounded; settle on the smallest position with 1.5·|value| <= 2^position
            while exceeds(magnitude, pow2(position)) {
                position += 1;
            }
            while position > 1 && !exceeds(magnitude, pow2(position - 1)) {
                position -= 1;
            }
            (position, false)
        } else {
            (0_i64, true)
        };

        Ok(Self {
            position,
            residual: value,
            weight: pow2(position - 1),
            leading_zero,
            trace: options.trace,
        })
    }

    /// Number of integer digits this recurrence will produce
    fn integer_digits(&self) -> usize {
        if self.leading_zero {
            1
        } else {
            usize::try_from(self.position).unwrap_or(0)
        }
    }

    /// Append the next digit to `out`, preceded by the point when crossing position 0.
    fn step(&mut self, out: &mut String) -> Digit {
        if self.position == 0 {
            out.push('.');
        }
        self.position -= 1;

        let digit = if exceeds(self.residual, self.weight) {
            self.residual -= self.weight;
            Digit::Plus
        } else if exceeds(-self.residual, self.weight) {
            self.residual += self.weight;
            Digit::Minus
        } else {
            Digit::Zero
        };
        out.push(digit.symbol());

        if self.trace {
            tracing::debug!(
                position = self.position,
                weight = self.weight,
                residual = self.residual,
                %digit,
                "signed digit"
            );
        }

        self.weight /= 2.0;
        digit
    }

    fn begin(&self, places_hint: usize) -> String {
        let mut out = String::with_capacity(
            self.integer_digits()
                .saturating_add(places_hint)
                .saturating_add(1),
        );
        if self.leading_zero {
            out.push(Digit::Zero.symbol());
        }
        out
    }
}

/// Exact `1.5 * residual > weight`. The fused multiply-add rounds only once, so the sign of
/// the difference is never lost to the rounding of `1.5 * residual`.
fn exceeds(residual: f64, weight: f64) -> bool {
    residual.mul_add(1.5, -weight) > 0.0
}

/// Encode `value` as a CSD string with exactly `places` fractional digits
///
/// Zero encodes to `"0"`. Magnitudes with `1.5 * |value| <= 1` start with a `0` integer
/// digit; when `places` is 0 the output has no point.
///
/// # Errors
///
/// Returns [`EncodeError::NonFinite`] for NaN or infinities and [`EncodeError::OutOfRange`]
/// when `1.5 * |value|` overflows.
pub fn encode_places(value: f64, places: usize) -> EncodeResult<String> {
    encode_places_with(value, places, &EncodeOptions::default())
}

/// [`encode_places`] with explicit [`EncodeOptions`]
///
/// # Errors
///
/// See [`encode_places`].
pub fn encode_places_with(
    value: f64,
    places: usize,
    options: &EncodeOptions,
) -> EncodeResult<String> {
    if value == 0.0 {
        return Ok(Digit::Zero.symbol().to_string());
    }

    let mut recurrence = Recurrence::start(value, options)?;
    let mut out = recurrence.begin(places);
    let last = i64::try_from(places).map_or(i64::MIN, |places| -places);

    while recurrence.position > last {
        recurrence.step(&mut out);
    }

    if options.trace {
        tracing::debug!(value, places, csd = %out, "encoded with fixed places");
    }
    Ok(out)
}

/// Encode `value` as a CSD string with at most `max_nonzero` non-zero digits
///
/// Fractional digits are emitted until the budget is spent or the residual falls to
/// [`NEGLIGIBLE_RESIDUAL`]. Once the budget is spent the residual is dropped, so any
/// remaining integer positions are filled with `0`. Zero encodes to `"0"`.
///
/// # Errors
///
/// Returns [`EncodeError::ZeroNonzeroBudget`] when `max_nonzero` is 0, and the same domain
/// errors as [`encode_places`].
pub fn encode_fixed_nonzero(value: f64, max_nonzero: usize) -> EncodeResult<String> {
    encode_fixed_nonzero_with(value, max_nonzero, &EncodeOptions::default())
}

/// [`encode_fixed_nonzero`] with explicit [`EncodeOptions`]
///
/// # Errors
///
/// See [`encode_fixed_nonzero`].
pub fn encode_fixed_nonzero_with(
    value: f64,
    max_nonzero: usize,
    options: &EncodeOptions,
) -> EncodeResult<String> {
    if value == 0.0 {
        return Ok(Digit::Zero.symbol().to_string());
    }
    if max_nonzero == 0 {
        return Err(EncodeError::ZeroNonzeroBudget);
    }

    let mut recurrence = Recurrence::start(value, options)?;
    // Each non-zero digit is followed by a zero, so the fraction rarely exceeds twice the budget
    let mut out = recurrence.begin(max_nonzero.saturating_mul(2));
    let mut remaining = max_nonzero;

    while recurrence.position > 0
        || (remaining > 0 && recurrence.residual.abs() > NEGLIGIBLE_RESIDUAL)
    {
        if recurrence.step(&mut out).is_nonzero() {
            remaining -= 1;
            if remaining == 0 {
                recurrence.residual = 0.0;
            }
        }
    }

    if options.trace {
        tracing::debug!(
            value,
            max_nonzero,
            unused = remaining,
            csd = %out,
            "encoded with non-zero budget"
        );
    }
    Ok(out)
}
