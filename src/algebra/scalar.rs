use super::{ArithmeticError, Interval, MpReal, Precision};
use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// Numeric capabilities required by the Crout solvers.
///
/// Implemented for the native floats, [`MpReal`] and [`Interval`].  Each
/// type has a `Context` from which constants are built: `()` for native
/// floats and the working [`Precision`] for the software types.  The
/// solvers recover the context from their inputs, so precision is never
/// read from hidden global state.
pub trait Scalar:
    Clone
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Construction context for constants.
    type Context: Clone + Debug;

    /// Type returned by [`magnitude`](Scalar::magnitude).
    type Magnitude: PartialOrd + Debug;

    /// Short name of the number domain, used in solver traces.
    const DOMAIN: &'static str;

    fn zero(ctx: &Self::Context) -> Self;

    fn one(ctx: &Self::Context) -> Self;

    /// Context this value was created in.
    fn context(&self) -> Self::Context;

    /// Division that reports a zero (or zero-containing) divisor
    /// instead of producing Inf or NaN.
    fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError>;

    /// Exact zero test.
    fn is_zero(&self) -> bool;

    /// Strict positivity.
    fn is_positive(&self) -> bool;

    /// Size of the value for negligibility tests.
    fn magnitude(&self) -> Self::Magnitude;

    /// The tolerance `eps` expressed as a magnitude.
    fn magnitude_threshold(eps: f64, ctx: &Self::Context) -> Self::Magnitude;

    /// True if `magnitude() < eps`.
    fn is_negligible(&self, eps: f64) -> bool {
        self.magnitude() < Self::magnitude_threshold(eps, &self.context())
    }
}

macro_rules! impl_scalar_for_float {
    ($ty:ty) => {
        impl Scalar for $ty {
            type Context = ();
            type Magnitude = $ty;
            const DOMAIN: &'static str = stringify!($ty);

            #[inline]
            fn zero(_ctx: &()) -> Self {
                0.0
            }
            #[inline]
            fn one(_ctx: &()) -> Self {
                1.0
            }
            #[inline]
            fn context(&self) {}

            fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
                if *rhs == 0.0 {
                    return Err(ArithmeticError::DivisionByZero);
                }
                let q = *self / *rhs;
                if q.is_finite() {
                    Ok(q)
                } else {
                    Err(ArithmeticError::NonFinite)
                }
            }
            #[inline]
            fn is_zero(&self) -> bool {
                *self == 0.0
            }
            #[inline]
            fn is_positive(&self) -> bool {
                *self > 0.0
            }
            #[inline]
            fn magnitude(&self) -> $ty {
                self.abs()
            }
            #[inline]
            fn magnitude_threshold(eps: f64, _ctx: &()) -> $ty {
                eps as $ty
            }
        }
    };
}

impl_scalar_for_float!(f32);
impl_scalar_for_float!(f64);

impl Scalar for MpReal {
    type Context = Precision;
    type Magnitude = MpReal;
    const DOMAIN: &'static str = "mpreal";

    fn zero(ctx: &Precision) -> Self {
        MpReal::zero(*ctx)
    }

    fn one(ctx: &Precision) -> Self {
        MpReal::one(*ctx)
    }

    fn context(&self) -> Precision {
        self.precision()
    }

    fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        self.div_round(rhs, super::RoundingMode::Nearest)
    }

    fn is_zero(&self) -> bool {
        MpReal::is_zero(self)
    }

    fn is_positive(&self) -> bool {
        MpReal::is_positive(self)
    }

    fn magnitude(&self) -> MpReal {
        self.abs()
    }

    fn magnitude_threshold(eps: f64, ctx: &Precision) -> MpReal {
        // a non-finite tolerance is rejected by settings validation
        MpReal::from_f64(eps, *ctx).unwrap_or_else(|_| MpReal::zero(*ctx))
    }
}

impl Scalar for Interval {
    type Context = Precision;
    type Magnitude = MpReal;
    const DOMAIN: &'static str = "interval";

    fn zero(ctx: &Precision) -> Self {
        Interval::zero(*ctx)
    }

    fn one(ctx: &Precision) -> Self {
        Interval::one(*ctx)
    }

    fn context(&self) -> Precision {
        self.precision()
    }

    fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        self.div_outward(rhs)
    }

    fn is_zero(&self) -> bool {
        Interval::is_zero(self)
    }

    /// Certainly positive: the whole enclosure lies above zero.
    fn is_positive(&self) -> bool {
        self.lower().is_positive()
    }

    /// Largest endpoint magnitude.  An approximation used only for
    /// negligibility tests, not an interval absolute value.
    fn magnitude(&self) -> MpReal {
        Interval::magnitude(self)
    }

    fn magnitude_threshold(eps: f64, ctx: &Precision) -> MpReal {
        MpReal::from_f64(eps, *ctx).unwrap_or_else(|_| MpReal::zero(*ctx))
    }
}
