//! Validated interval enclosures over [`MpReal`] endpoints.
//!
//! Every operation computes the lower bound rounded toward −∞ and the
//! upper bound rounded toward +∞, so the exact real result of the
//! operation on any pair of enclosed reals lies inside the returned
//! interval.  Intervals are immutable values.

use super::{ArithmeticError, MpReal, Precision, RoundingMode};
use std::ops::{Add, Mul, Neg, Sub};

use RoundingMode::{Down, Up};

/// Closed interval `[lower, upper]` with `lower <= upper`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interval {
    lower: MpReal,
    upper: MpReal,
}

impl Interval {
    /// Interval with explicit endpoints.  Fails if `lower > upper`.
    pub fn new(lower: MpReal, upper: MpReal) -> Result<Self, ArithmeticError> {
        if lower > upper {
            return Err(ArithmeticError::InvertedInterval {
                lower: lower.to_string(),
                upper: upper.to_string(),
            });
        }
        Ok(Self { lower, upper })
    }

    /// Degenerate interval `[x, x]`.
    pub fn point(x: MpReal) -> Self {
        Self {
            lower: x.clone(),
            upper: x,
        }
    }

    pub fn zero(precision: Precision) -> Self {
        Self::point(MpReal::zero(precision))
    }

    pub fn one(precision: Precision) -> Self {
        Self::point(MpReal::one(precision))
    }

    /// Tightest enclosure of a native double at the given precision.
    pub fn from_f64(x: f64, precision: Precision) -> Result<Self, ArithmeticError> {
        Ok(Self {
            lower: MpReal::from_f64_round(x, precision, Down)?,
            upper: MpReal::from_f64_round(x, precision, Up)?,
        })
    }

    pub fn lower(&self) -> &MpReal {
        &self.lower
    }

    pub fn upper(&self) -> &MpReal {
        &self.upper
    }

    pub fn precision(&self) -> Precision {
        self.lower.precision().max(self.upper.precision())
    }

    /// `upper - lower`, rounded up.
    pub fn width(&self) -> MpReal {
        self.upper.sub_round(&self.lower, Up)
    }

    /// Midpoint rounded to nearest.  Not guaranteed to be the exact midpoint.
    pub fn midpoint(&self) -> MpReal {
        let two = MpReal::from_i64(2, self.precision());
        let sum = self.lower.add_round(&self.upper, RoundingMode::Nearest);
        // dividing by two is exact
        sum.div_round(&two, RoundingMode::Nearest)
            .unwrap_or_else(|_| self.lower.clone())
    }

    pub fn is_point(&self) -> bool {
        self.lower == self.upper
    }

    /// True only for the degenerate interval `[0, 0]`.
    pub fn is_zero(&self) -> bool {
        self.lower.is_zero() && self.upper.is_zero()
    }

    pub fn contains(&self, x: &MpReal) -> bool {
        &self.lower <= x && x <= &self.upper
    }

    pub fn contains_zero(&self) -> bool {
        self.contains(&MpReal::zero(self.precision()))
    }

    /// True if `other` lies entirely inside `self`.
    pub fn encloses(&self, other: &Interval) -> bool {
        self.lower <= other.lower && other.upper <= self.upper
    }

    /// Largest endpoint magnitude, `max(|lower|, |upper|)`.
    ///
    /// This is not the interval absolute value.  It is only meant as a
    /// scale for negligibility tests on pivots.
    pub fn magnitude(&self) -> MpReal {
        let lo = self.lower.abs();
        let hi = self.upper.abs();
        if lo > hi {
            lo
        } else {
            hi
        }
    }

    pub fn add_outward(&self, rhs: &Interval) -> Interval {
        Interval {
            lower: self.lower.add_round(&rhs.lower, Down),
            upper: self.upper.add_round(&rhs.upper, Up),
        }
    }

    pub fn sub_outward(&self, rhs: &Interval) -> Interval {
        Interval {
            lower: self.lower.sub_round(&rhs.upper, Down),
            upper: self.upper.sub_round(&rhs.lower, Up),
        }
    }

    pub fn mul_outward(&self, rhs: &Interval) -> Interval {
        let pairs = [
            (&self.lower, &rhs.lower),
            (&self.lower, &rhs.upper),
            (&self.upper, &rhs.lower),
            (&self.upper, &rhs.upper),
        ];
        let lows = pairs.map(|(a, b)| a.mul_round(b, Down));
        let highs = pairs.map(|(a, b)| a.mul_round(b, Up));
        Interval {
            lower: min_all(lows),
            upper: max_all(highs),
        }
    }

    /// Outward rounded quotient.  Fails if `rhs` contains zero.
    pub fn div_outward(&self, rhs: &Interval) -> Result<Interval, ArithmeticError> {
        if rhs.contains_zero() {
            return Err(ArithmeticError::DivisionByZeroInterval);
        }
        let (a, b) = (&self.lower, &self.upper);
        let (c, d) = (&rhs.lower, &rhs.upper);
        let lows = [
            a.div_round(c, Down)?,
            a.div_round(d, Down)?,
            b.div_round(c, Down)?,
            b.div_round(d, Down)?,
        ];
        let highs = [
            a.div_round(c, Up)?,
            a.div_round(d, Up)?,
            b.div_round(c, Up)?,
            b.div_round(d, Up)?,
        ];
        Ok(Interval {
            lower: min_all(lows),
            upper: max_all(highs),
        })
    }
}

fn min_all(values: [MpReal; 4]) -> MpReal {
    let [a, b, c, d] = &values;
    a.min_of(b).min_of(c.min_of(d)).clone()
}

fn max_all(values: [MpReal; 4]) -> MpReal {
    let [a, b, c, d] = &values;
    a.max_of(b).max_of(c.max_of(d)).clone()
}

impl Neg for Interval {
    type Output = Interval;
    fn neg(self) -> Interval {
        Interval {
            lower: -self.upper,
            upper: -self.lower,
        }
    }
}

impl Neg for &Interval {
    type Output = Interval;
    fn neg(self) -> Interval {
        Interval {
            lower: -&self.upper,
            upper: -&self.lower,
        }
    }
}

macro_rules! impl_interval_binop {
    ($Trait:ident, $method:ident, $outward:ident) => {
        impl<'a> $Trait<&'a Interval> for &'a Interval {
            type Output = Interval;
            #[inline]
            fn $method(self, rhs: &'a Interval) -> Interval {
                self.$outward(rhs)
            }
        }

        impl $Trait for Interval {
            type Output = Interval;
            #[inline]
            fn $method(self, rhs: Interval) -> Interval {
                self.$outward(&rhs)
            }
        }
    };
}

impl_interval_binop!(Add, add, add_outward);
impl_interval_binop!(Sub, sub, sub_outward);
impl_interval_binop!(Mul, mul, mul_outward);

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let digits = f.precision().unwrap_or(13);
        write!(
            f,
            "[{}, {}]",
            self.lower.to_decimal(digits, Down).to_scientific('e', 1),
            self.upper.to_decimal(digits, Up).to_scientific('e', 1)
        )
    }
}
