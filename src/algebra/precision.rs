use super::ArithmeticError;
use lazy_static::lazy_static;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default working precision in bits when none is configured.
pub const DEFAULT_PRECISION_BITS: u32 = 256;

/// Environment variable read once, on first use, to override
/// [`DEFAULT_PRECISION_BITS`].
pub const PRECISION_ENV_VAR: &str = "CROUT_PRECISION_BITS";

lazy_static! {
    static ref DEFAULT_PRECISION: Precision = Precision::from_env();
}

/// Working precision (mantissa width in bits) of an [`MpReal`](crate::algebra::MpReal).
///
/// Precision is always passed explicitly to constructors.  The process-wide
/// default returned by [`Precision::default`] is captured once, the first
/// time it is requested, and never changes afterwards.  Values created
/// before and after that point therefore always agree on its meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct Precision {
    bits: u32,
}

impl Precision {
    /// Smallest supported mantissa width.
    pub const MIN_BITS: u32 = 2;
    /// Largest supported mantissa width.
    pub const MAX_BITS: u32 = 1 << 20;

    pub fn new(bits: u32) -> Result<Self, ArithmeticError> {
        if (Self::MIN_BITS..=Self::MAX_BITS).contains(&bits) {
            Ok(Self { bits })
        } else {
            Err(ArithmeticError::InvalidPrecision(bits))
        }
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Number of decimal digits that this precision faithfully represents.
    pub fn decimal_digits(&self) -> usize {
        (self.bits as f64 * std::f64::consts::LOG10_2).floor() as usize
    }

    fn from_env() -> Self {
        std::env::var(PRECISION_ENV_VAR)
            .ok()
            .and_then(|s| s.trim().parse::<u32>().ok())
            .and_then(|bits| Precision::new(bits).ok())
            .unwrap_or(Precision {
                bits: DEFAULT_PRECISION_BITS,
            })
    }
}

impl Default for Precision {
    fn default() -> Self {
        *DEFAULT_PRECISION
    }
}

impl TryFrom<u32> for Precision {
    type Error = ArithmeticError;
    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Precision::new(bits)
    }
}

impl From<Precision> for u32 {
    fn from(p: Precision) -> u32 {
        p.bits
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} bits", self.bits)
    }
}

/// Rounding direction applied when an exact result does not fit
/// in the working precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round to nearest, ties to even
    Nearest,
    /// Round toward negative infinity
    Down,
    /// Round toward positive infinity
    Up,
    /// Truncate toward zero
    TowardZero,
}

impl RoundingMode {
    /// Whether an inexact magnitude should be rounded away from zero,
    /// for directed modes only.  `Nearest` is decided by the discarded bits.
    pub(crate) fn directed_away(&self, negative: bool) -> Option<bool> {
        match self {
            RoundingMode::Nearest => None,
            RoundingMode::Down => Some(negative),
            RoundingMode::Up => Some(!negative),
            RoundingMode::TowardZero => Some(false),
        }
    }
}
