use std::fmt;

/// A single radix-2 signed digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Digit {
    Minus,
    Zero,
    Plus,
}

impl Digit {
    /// The character used for this digit in a CSD string
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Minus => '-',
            Self::Zero => '0',
            Self::Plus => '+',
        }
    }

    /// Read a digit character. The point `.` is not a digit and yields `None`.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '-' => Some(Self::Minus),
            '0' => Some(Self::Zero),
            '+' => Some(Self::Plus),
            _ => None,
        }
    }

    /// Signed value of the digit: -1, 0 or +1
    #[must_use]
    pub const fn value(self) -> i8 {
        match self {
            Self::Minus => -1,
            Self::Zero => 0,
            Self::Plus => 1,
        }
    }

    #[must_use]
    pub const fn is_nonzero(self) -> bool {
        !matches!(self, Self::Zero)
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> Self {
        digit.symbol()
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// True when no two consecutive digits in `digits` are both non-zero.
#[must_use]
pub fn is_non_adjacent<I>(digits: I) -> bool
where
    I: IntoIterator<Item = Digit>,
{
    let mut previous = Digit::Zero;
    for digit in digits {
        if previous.is_nonzero() && digit.is_nonzero() {
            return false;
        }
        previous = digit;
    }
    true
}

/// `2^exponent` built from its bit pattern: exact across the normal and subnormal range,
/// `inf` above it and `0` below it.
#[allow(clippy::cast_sign_loss)]
pub(crate) fn pow2(exponent: i64) -> f64 {
    const EXPLICIT_BITS: u32 = f64::MANTISSA_DIGITS - 1;
    const MAX_EXP: i64 = f64::MAX_EXP as i64 - 1;
    const MIN_EXP: i64 = f64::MIN_EXP as i64 - 1;
    const MIN_SUBNORMAL_EXP: i64 = MIN_EXP - EXPLICIT_BITS as i64;

    match exponent {
        e if e > MAX_EXP => f64::INFINITY,
        e if e >= MIN_EXP => f64::from_bits(((e - MIN_EXP + 1) as u64) << EXPLICIT_BITS),
        e if e >= MIN_SUBNORMAL_EXP => f64::from_bits(1_u64 << (e - MIN_SUBNORMAL_EXP)),
        _ => 0.0,
    }
}
