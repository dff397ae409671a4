//! Numeric types and the scalar capabilities used by the solvers.
//!
//! The solvers in [`crate::solver`] are generic over the [`Scalar`] trait,
//! which is implemented here for:
//!
//! * native floats (`f32`, `f64`),
//! * [`MpReal`], a software binary float with a user chosen [`Precision`]
//!   and explicit [`RoundingMode`],
//! * [`Interval`], a validated enclosure with `MpReal` endpoints.

mod error_types;
mod floats;
mod interval;
mod matrix;
mod mpreal;
mod precision;
mod scalar;

pub use error_types::*;
pub use floats::*;
pub use interval::*;
pub use matrix::*;
pub use mpreal::{DecimalRepr, MpReal};
pub(crate) use mpreal::pow10;
pub use precision::*;
pub use scalar::*;

#[cfg(test)]
mod tests;
