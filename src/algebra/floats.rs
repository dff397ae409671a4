use num_traits::{Float, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display, LowerExp};
use std::str::FromStr;

/// Core traits for native floating point values.
///
/// `FloatT` is the machine floating point side of the scalar domain.  It is
/// implemented for `f32` and `f64`, and any other type satisfying the bounds
/// below, relying on [`num_traits`](num_traits) for most of them.  The text
/// codec parses into `FloatT` types through their `FromStr` implementation.
pub trait FloatT:
    'static
    + Send
    + Sync
    + Float
    + NumAssign
    + Default
    + FromPrimitive
    + FromStr
    + Display
    + LowerExp
    + Debug
    + Sized
{
}

impl<T> FloatT for T where
    T: 'static
        + Send
        + Sync
        + Float
        + NumAssign
        + Default
        + FromPrimitive
        + FromStr
        + Display
        + LowerExp
        + Debug
        + Sized
{
}
