use crate::algebra::Precision;
use crate::solver::SettingsError;
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decimal separator convention used when reading text.
///
/// The comma is both a natural decimal separator in many locales and the
/// separator between interval endpoints, so the convention must be chosen.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DecimalSeparator {
    /// `.` is the decimal point, `a,b` are interval endpoints
    #[default]
    Period,
    /// `,` is the decimal point, `a;b` are interval endpoints
    Comma,
    /// A single comma is an endpoint separator if the text also contains
    /// a period, otherwise a decimal point
    Auto,
}

/// Layout used when printing native floats.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FloatNotation {
    /// `-1.250000`
    #[default]
    Fixed,
    /// `-1.250000E+000`
    Scientific,
}

/// Largest accepted number of printed digits.
pub const MAX_PRINTED_DIGITS: usize = 100;

/// Text conversion settings shared by every scalar type.
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CodecSettings {
    ///working precision for arbitrary precision and interval values
    #[builder(default = "Precision::default()")]
    pub precision: Precision,

    ///separator convention for reading decimal text
    #[builder(default = "DecimalSeparator::Period")]
    pub decimal_separator: DecimalSeparator,

    ///fixed or scientific output for native floats
    #[builder(default = "FloatNotation::Fixed")]
    pub float_notation: FloatNotation,

    ///digits after the point for native floats
    #[builder(default = "6")]
    pub float_digits: usize,

    ///digits after the point for arbitrary precision values
    #[builder(default = "14")]
    pub precision_digits: usize,

    ///digits after the point for interval endpoints and widths
    #[builder(default = "13")]
    pub interval_digits: usize,

    ///minimum number of exponent digits in scientific output
    #[builder(default = "3")]
    pub exponent_width: usize,
}

impl Default for CodecSettings {
    fn default() -> CodecSettings {
        CodecSettingsBuilder::default().build().unwrap()
    }
}

impl CodecSettings {
    /// Checks field ranges of a directly constructed settings object.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_digits(self.float_digits)?;
        validate_digits(self.precision_digits)?;
        validate_digits(self.interval_digits)?;
        validate_exponent_width(self.exponent_width)?;
        Ok(())
    }
}

impl From<SettingsError> for CodecSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        CodecSettingsBuilderError::ValidationError(e.to_string())
    }
}

impl CodecSettingsBuilder {
    pub fn validate(&self) -> Result<(), SettingsError> {
        for digits in [self.float_digits, self.precision_digits, self.interval_digits]
            .into_iter()
            .flatten()
        {
            validate_digits(digits)?;
        }
        if let Some(width) = self.exponent_width {
            validate_exponent_width(width)?;
        }
        Ok(())
    }
}

fn validate_digits(digits: usize) -> Result<(), SettingsError> {
    if digits > MAX_PRINTED_DIGITS {
        return Err(SettingsError::BadFieldValue {
            field: "digits",
            reason: format!("{digits} exceeds {MAX_PRINTED_DIGITS}"),
        });
    }
    Ok(())
}

fn validate_exponent_width(width: usize) -> Result<(), SettingsError> {
    if !(1..=6).contains(&width) {
        return Err(SettingsError::BadFieldValue {
            field: "exponent_width",
            reason: format!("{width} is outside 1..=6"),
        });
    }
    Ok(())
}

#[test]
fn test_codec_settings_validate() {
    let settings = CodecSettingsBuilder::default().build().unwrap();
    assert_eq!(settings, CodecSettings::default());
    assert_eq!(settings.decimal_separator, DecimalSeparator::Period);
    assert_eq!(settings.precision_digits, 14);

    assert!(CodecSettingsBuilder::default()
        .float_digits(101)
        .build()
        .is_err());
    assert!(CodecSettingsBuilder::default()
        .exponent_width(0)
        .build()
        .is_err());
    assert!(CodecSettingsBuilder::default()
        .exponent_width(6)
        .interval_digits(100)
        .build()
        .is_ok());

    let settings = CodecSettings {
        exponent_width: 7,
        ..CodecSettings::default()
    };
    assert!(settings.validate().is_err());
}
