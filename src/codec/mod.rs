//! Conversion between decimal text and scalar values.
//!
//! Every scalar type accepts the same decimal literal grammar (see
//! [`ExactDecimal`]).  Literals are first read exactly and only then
//! rounded, so an [`Interval`] read from text is the tightest enclosure
//! of the decimal value at the working precision.

use crate::algebra::{FloatT, Interval, MpReal, RoundingMode};

mod decimal;
mod error;
mod format;
mod parse;
mod settings;

pub use decimal::*;
pub use error::*;
pub use settings::*;
pub(crate) use format::exp_str_reformat;

/// Text input and output for a scalar type.
pub trait TextCodec: Sized {
    fn parse_text(text: &str, settings: &CodecSettings) -> Result<Self, ParseError>;

    fn format_text(&self, settings: &CodecSettings) -> String;
}

fn parse_float<T: FloatT>(text: &str, settings: &CodecSettings) -> Result<T, ParseError> {
    let literal = parse::scalar_literal(text, settings.decimal_separator)?;
    // validate the grammar before handing over to the native parser,
    // which accepts `inf` and `nan`
    let exact = ExactDecimal::parse(&literal).map_err(|e| e.with_text(text))?;
    let v = literal
        .trim()
        .parse::<T>()
        .map_err(|_| ParseError::InvalidNumber(text.to_string()))?;
    // a nonzero literal must not underflow to an exact zero
    if !v.is_finite() || (v.is_zero() && !exact.is_zero()) {
        return Err(ParseError::OutOfRange(text.to_string()));
    }
    Ok(v)
}

macro_rules! impl_text_codec_for_float {
    ($ty:ty) => {
        impl TextCodec for $ty {
            fn parse_text(text: &str, settings: &CodecSettings) -> Result<Self, ParseError> {
                parse_float(text, settings)
            }

            fn format_text(&self, settings: &CodecSettings) -> String {
                format::format_float(*self, settings)
            }
        }
    };
}

impl_text_codec_for_float!(f32);
impl_text_codec_for_float!(f64);

impl TextCodec for MpReal {
    fn parse_text(text: &str, settings: &CodecSettings) -> Result<Self, ParseError> {
        let literal = parse::scalar_literal(text, settings.decimal_separator)?;
        let v = ExactDecimal::parse(&literal).map_err(|e| e.with_text(text))?;
        Ok(v.to_mpreal(settings.precision, RoundingMode::Nearest))
    }

    fn format_text(&self, settings: &CodecSettings) -> String {
        format::format_mpreal(
            self,
            settings.precision_digits,
            RoundingMode::Nearest,
            settings.exponent_width,
        )
    }
}

impl TextCodec for Interval {
    fn parse_text(text: &str, settings: &CodecSettings) -> Result<Self, ParseError> {
        let (lo, hi) = parse::interval_bounds(text, settings.decimal_separator)?;
        let lower = lo.to_mpreal(settings.precision, RoundingMode::Down);
        let upper = hi.to_mpreal(settings.precision, RoundingMode::Up);
        // ordered exact bounds rounded outward stay ordered
        Interval::new(lower, upper).map_err(|_| ParseError::InvalidInterval {
            text: text.to_string(),
            expected: "lower endpoint not above upper endpoint",
        })
    }

    fn format_text(&self, settings: &CodecSettings) -> String {
        format::format_interval(self, settings)
    }
}
