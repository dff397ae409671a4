use thiserror::Error;

/// Error type returned when decimal text cannot be converted to a number.
///
/// Every variant carries the offending text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input is empty or whitespace only
    #[error("empty input where a number was expected: {0:?}")]
    Empty(String),
    /// Text is not a decimal literal
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),
    /// Text is a literal whose value cannot be represented
    #[error("number out of range: {0:?}")]
    OutOfRange(String),
    /// Text does not have one of the accepted interval shapes
    #[error("invalid interval {text:?}: expected {expected}")]
    InvalidInterval {
        text: String,
        expected: &'static str,
    },
}

impl ParseError {
    /// The same error reported against the cell text `text`, for errors
    /// raised on a rewritten or split literal.
    pub(crate) fn with_text(self, text: &str) -> Self {
        match self {
            ParseError::Empty(_) => ParseError::Empty(text.to_string()),
            ParseError::InvalidNumber(_) => ParseError::InvalidNumber(text.to_string()),
            ParseError::OutOfRange(_) => ParseError::OutOfRange(text.to_string()),
            ParseError::InvalidInterval { expected, .. } => ParseError::InvalidInterval {
                text: text.to_string(),
                expected,
            },
        }
    }
}
