use super::MpReal;
use crate::algebra::{ArithmeticError, RoundingMode};
use std::ops::{Add, Mul, Neg, Sub};

impl MpReal {
    /// `self + rhs` rounded in direction `mode`, at the wider of the
    /// two operand precisions.
    pub fn add_round(&self, rhs: &MpReal, mode: RoundingMode) -> MpReal {
        let precision = self.precision.max(rhs.precision);
        if rhs.is_zero() {
            return self.with_precision(precision, mode);
        }
        if self.is_zero() {
            return rhs.with_precision(precision, mode);
        }

        let (big, small) = if self.top_exponent() >= rhs.top_exponent() {
            (self, rhs)
        } else {
            (rhs, self)
        };

        // the smaller operand sits entirely below the guard bits of the
        // larger one, so it only decides the rounding direction
        let bits = precision.bits() as i64;
        if big.top_exponent() - small.top_exponent() >= bits + 2 {
            let shift = (bits + 2 - big.mantissa.bits() as i64).max(0) as u64;
            let m = &big.mantissa << shift;
            let m = if big.negative == small.negative {
                m
            } else {
                m - 1u32
            };
            return MpReal::from_parts(
                big.negative,
                m,
                big.exponent - shift as i64,
                true,
                precision,
                mode,
            );
        }

        let e = self.exponent.min(rhs.exponent);
        let a = &self.mantissa << (self.exponent - e) as u64;
        let b = &rhs.mantissa << (rhs.exponent - e) as u64;

        let (negative, m) = if self.negative == rhs.negative {
            (self.negative, a + b)
        } else {
            match a.cmp(&b) {
                std::cmp::Ordering::Greater => (self.negative, a - b),
                std::cmp::Ordering::Less => (rhs.negative, b - a),
                std::cmp::Ordering::Equal => return MpReal::zero(precision),
            }
        };
        MpReal::from_parts(negative, m, e, false, precision, mode)
    }

    /// `self - rhs` rounded in direction `mode`.
    pub fn sub_round(&self, rhs: &MpReal, mode: RoundingMode) -> MpReal {
        self.add_round(&-rhs, mode)
    }

    /// `self * rhs` rounded in direction `mode`.
    pub fn mul_round(&self, rhs: &MpReal, mode: RoundingMode) -> MpReal {
        let precision = self.precision.max(rhs.precision);
        if self.is_zero() || rhs.is_zero() {
            return MpReal::zero(precision);
        }
        MpReal::from_parts(
            self.negative != rhs.negative,
            &self.mantissa * &rhs.mantissa,
            self.exponent + rhs.exponent,
            false,
            precision,
            mode,
        )
    }

    /// `self / rhs` rounded in direction `mode`.  Fails on a zero divisor.
    pub fn div_round(&self, rhs: &MpReal, mode: RoundingMode) -> Result<MpReal, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let precision = self.precision.max(rhs.precision);
        Ok(MpReal::from_ratio(
            self.negative != rhs.negative,
            &self.mantissa,
            &rhs.mantissa,
            self.exponent - rhs.exponent,
            precision,
            mode,
        ))
    }

    pub fn min_of<'a>(&'a self, other: &'a MpReal) -> &'a MpReal {
        if other < self {
            other
        } else {
            self
        }
    }

    pub fn max_of<'a>(&'a self, other: &'a MpReal) -> &'a MpReal {
        if other > self {
            other
        } else {
            self
        }
    }
}

impl Neg for &MpReal {
    type Output = MpReal;
    fn neg(self) -> MpReal {
        MpReal {
            negative: !self.negative && !self.is_zero(),
            ..self.clone()
        }
    }
}

impl Neg for MpReal {
    type Output = MpReal;
    fn neg(mut self) -> MpReal {
        self.negative = !self.negative && !self.is_zero();
        self
    }
}

macro_rules! impl_mpreal_binop {
    ($Trait:ident, $method:ident, $round:ident) => {
        impl<'a> $Trait<&'a MpReal> for &'a MpReal {
            type Output = MpReal;
            #[inline]
            fn $method(self, rhs: &'a MpReal) -> MpReal {
                self.$round(rhs, RoundingMode::Nearest)
            }
        }

        impl $Trait for MpReal {
            type Output = MpReal;
            #[inline]
            fn $method(self, rhs: MpReal) -> MpReal {
                self.$round(&rhs, RoundingMode::Nearest)
            }
        }
    };
}

impl_mpreal_binop!(Add, add, add_round);
impl_mpreal_binop!(Sub, sub, sub_round);
impl_mpreal_binop!(Mul, mul, mul_round);
