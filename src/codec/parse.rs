use super::{DecimalSeparator, ExactDecimal, ParseError};
use std::borrow::Cow;

/// Shape of an interval cell after separator handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum IntervalShape<'a> {
    Single(Cow<'a, str>),
    Endpoints(Cow<'a, str>, Cow<'a, str>),
}

const PERIOD_SHAPES: &str = "a value `v` or endpoints `a,b`";
const COMMA_SHAPES: &str = "a value `v` or endpoints `a;b` with `,` as decimal point";
const AUTO_SHAPES: &str = "a value `v` or endpoints `a,b`, with at most one comma";
const ENDPOINTS: &str = "two decimal endpoints";

/// Rewrites a decimal-comma literal to use a period.  A period in such
/// text is not a decimal point and makes the literal invalid.
fn comma_to_period(text: &str) -> Result<Cow<'_, str>, ParseError> {
    if text.contains('.') {
        return Err(ParseError::InvalidNumber(text.to_string()));
    }
    if !text.contains(',') {
        return Ok(Cow::Borrowed(text));
    }
    Ok(Cow::Owned(text.replace(',', ".")))
}

/// Literal text of a single scalar cell under the given convention.
pub(crate) fn scalar_literal(
    text: &str,
    separator: DecimalSeparator,
) -> Result<Cow<'_, str>, ParseError> {
    match separator {
        DecimalSeparator::Period => Ok(Cow::Borrowed(text)),
        DecimalSeparator::Comma => comma_to_period(text),
        DecimalSeparator::Auto => {
            if text.matches(',').count() == 1 && !text.contains('.') {
                comma_to_period(text)
            } else {
                Ok(Cow::Borrowed(text))
            }
        }
    }
}

/// Splits interval text into a single value or a pair of endpoints.
pub(crate) fn interval_shape(
    text: &str,
    separator: DecimalSeparator,
) -> Result<IntervalShape<'_>, ParseError> {
    let shape_error = |expected| ParseError::InvalidInterval {
        text: text.to_string(),
        expected,
    };
    match separator {
        DecimalSeparator::Period => match text.split_once(',') {
            None => Ok(IntervalShape::Single(Cow::Borrowed(text))),
            Some((_, b)) if b.contains(',') => Err(shape_error(PERIOD_SHAPES)),
            Some((a, b)) => Ok(IntervalShape::Endpoints(Cow::Borrowed(a), Cow::Borrowed(b))),
        },
        DecimalSeparator::Comma => match text.split_once(';') {
            None => Ok(IntervalShape::Single(comma_to_period(text)?)),
            Some((_, b)) if b.contains(';') => Err(shape_error(COMMA_SHAPES)),
            Some((a, b)) => {
                let a = comma_to_period(a).map_err(|_| shape_error(ENDPOINTS))?;
                let b = comma_to_period(b).map_err(|_| shape_error(ENDPOINTS))?;
                Ok(IntervalShape::Endpoints(a, b))
            }
        },
        DecimalSeparator::Auto => match text.matches(',').count() {
            0 => Ok(IntervalShape::Single(Cow::Borrowed(text))),
            1 if text.contains('.') => {
                let (a, b) = text.split_once(',').ok_or_else(|| shape_error(AUTO_SHAPES))?;
                Ok(IntervalShape::Endpoints(Cow::Borrowed(a), Cow::Borrowed(b)))
            }
            1 => Ok(IntervalShape::Single(comma_to_period(text)?)),
            _ => Err(shape_error(AUTO_SHAPES)),
        },
    }
}

/// Parses interval text into exact, ordered endpoints `(lo, hi)`.
pub(crate) fn interval_bounds(
    text: &str,
    separator: DecimalSeparator,
) -> Result<(ExactDecimal, ExactDecimal), ParseError> {
    let endpoint = |v: &str| {
        ExactDecimal::parse(v).map_err(|e| match e {
            ParseError::OutOfRange(_) => e.with_text(text),
            _ => ParseError::InvalidInterval {
                text: text.to_string(),
                expected: ENDPOINTS,
            },
        })
    };
    match interval_shape(text, separator)? {
        IntervalShape::Single(v) => {
            let v = ExactDecimal::parse(&v).map_err(|e| e.with_text(text))?;
            Ok((v.clone(), v))
        }
        IntervalShape::Endpoints(a, b) => {
            let a = endpoint(a.as_ref())?;
            let b = endpoint(b.as_ref())?;
            if a > b {
                Ok((b, a))
            } else {
                Ok((a, b))
            }
        }
    }
}
