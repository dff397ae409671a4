//! Arbitrary precision binary floating point reals.
//!
//! An [`MpReal`] stores `(-1)^s * m * 2^e` with an unbounded integer
//! mantissa `m` of at most `precision` significant bits and an unbounded
//! exponent.  Every operation is computed exactly and then rounded once,
//! in an explicitly chosen [`RoundingMode`].  The operator traits round
//! to nearest; the `*_round` methods let callers pick a direction, which
//! is what [`Interval`](crate::algebra::Interval) uses to round outward.

use crate::algebra::{ArithmeticError, Precision, RoundingMode};
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use std::cmp::Ordering;

mod arith;
mod decimal;
pub(crate) mod rounding;

pub use decimal::DecimalRepr;
pub(crate) use rounding::pow10;
use rounding::round_mantissa;

/// Arbitrary precision real number with a fixed working precision.
#[derive(Clone, Debug)]
pub struct MpReal {
    negative: bool,
    mantissa: BigUint,
    exponent: i64,
    precision: Precision,
}

impl MpReal {
    pub fn zero(precision: Precision) -> Self {
        Self {
            negative: false,
            mantissa: BigUint::zero(),
            exponent: 0,
            precision,
        }
    }

    pub fn one(precision: Precision) -> Self {
        Self::from_i64(1, precision)
    }

    /// Integer value, rounded to nearest if wider than `precision`.
    pub fn from_i64(value: i64, precision: Precision) -> Self {
        Self::from_parts(
            value < 0,
            BigUint::from(value.unsigned_abs()),
            0,
            false,
            precision,
            RoundingMode::Nearest,
        )
    }

    /// Exact conversion from a native double when `precision` holds at
    /// least 53 bits, rounded to nearest otherwise.
    pub fn from_f64(value: f64, precision: Precision) -> Result<Self, ArithmeticError> {
        Self::from_f64_round(value, precision, RoundingMode::Nearest)
    }

    pub fn from_f64_round(
        value: f64,
        precision: Precision,
        mode: RoundingMode,
    ) -> Result<Self, ArithmeticError> {
        if !value.is_finite() {
            return Err(ArithmeticError::NonFinite);
        }
        let (mantissa, exponent, sign) = num_traits::float::FloatCore::integer_decode(value);
        Ok(Self::from_parts(
            sign < 0,
            BigUint::from(mantissa),
            exponent as i64,
            false,
            precision,
            mode,
        ))
    }

    /// Builds `(-1)^negative * (mantissa + tail) * 2^exponent` rounded to
    /// `precision`, where `tail` is some value in (0,1) if `sticky` is set.
    pub(crate) fn from_parts(
        negative: bool,
        mantissa: BigUint,
        exponent: i64,
        sticky: bool,
        precision: Precision,
        mode: RoundingMode,
    ) -> Self {
        let (mantissa, exponent) =
            round_mantissa(negative, mantissa, exponent, sticky, precision.bits(), mode);
        let negative = negative && !mantissa.is_zero();
        Self {
            negative,
            mantissa,
            exponent,
            precision,
        }
    }

    /// Rounds `(-1)^negative * num / den * 2^exponent`.  `den` must be nonzero.
    pub(crate) fn from_ratio(
        negative: bool,
        num: &BigUint,
        den: &BigUint,
        exponent: i64,
        precision: Precision,
        mode: RoundingMode,
    ) -> Self {
        debug_assert!(!den.is_zero());
        if num.is_zero() {
            return Self::zero(precision);
        }
        // enough quotient bits for a guard bit below the last kept one
        let extra = precision.bits() as i64 + 2 + den.bits() as i64 - num.bits() as i64;
        let extra = extra.max(0) as u64;
        let scaled = num << extra;
        let quotient = &scaled / den;
        let sticky = !(&scaled % den).is_zero();
        Self::from_parts(
            negative,
            quotient,
            exponent - extra as i64,
            sticky,
            precision,
            mode,
        )
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Copy rounded to another working precision.
    pub fn with_precision(&self, precision: Precision, mode: RoundingMode) -> Self {
        Self::from_parts(
            self.negative,
            self.mantissa.clone(),
            self.exponent,
            false,
            precision,
            mode,
        )
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            ..self.clone()
        }
    }

    /// Nearest native double.  Values outside the `f64` range
    /// saturate to zero or infinity.
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        let (mantissa, exponent) = round_mantissa(
            self.negative,
            self.mantissa.clone(),
            self.exponent,
            false,
            53,
            RoundingMode::Nearest,
        );
        let m = mantissa.to_f64().unwrap_or(f64::INFINITY);
        let v = scale_by_pow2(m, exponent);
        if self.negative {
            -v
        } else {
            v
        }
    }

    /// Exponent `t` such that `2^(t-1) <= |self| < 2^t`.
    pub(crate) fn top_exponent(&self) -> i64 {
        self.exponent + self.mantissa.bits() as i64
    }

    fn cmp_abs(&self, other: &Self) -> Ordering {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
        let (ta, tb) = (self.top_exponent(), other.top_exponent());
        if ta != tb {
            return ta.cmp(&tb);
        }
        let e = self.exponent.min(other.exponent);
        let a = &self.mantissa << (self.exponent - e) as u64;
        let b = &other.mantissa << (other.exponent - e) as u64;
        a.cmp(&b)
    }
}

fn scale_by_pow2(mut v: f64, mut e: i64) -> f64 {
    const STEP: i64 = 1000;
    while e > STEP && v.is_finite() {
        v *= 2f64.powi(STEP as i32);
        e -= STEP;
    }
    while e < -STEP && v != 0.0 {
        v *= 2f64.powi(-STEP as i32);
        e += STEP;
    }
    v * 2f64.powi(e as i32)
}

impl PartialEq for MpReal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MpReal {}

impl PartialOrd for MpReal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MpReal {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.negative != other.negative {
            return if self.negative {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
        let ord = self.cmp_abs(other);
        if self.negative {
            ord.reverse()
        } else {
            ord
        }
    }
}

impl std::fmt::Display for MpReal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let digits = f.precision().unwrap_or(14);
        let repr = self.to_decimal(digits, RoundingMode::Nearest);
        write!(f, "{}", repr.to_scientific('e', 1))
    }
}
