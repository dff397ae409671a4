use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("bad value for field {field}: {reason}")]
    BadFieldValue { field: &'static str, reason: String },
}

/// Default tolerance below which a pivot magnitude is treated as zero.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-20;

/// Settings of the Crout solvers.

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverSettings {
    ///pivots with magnitude below this value count as zero in the
    ///symmetric and tridiagonal solvers
    #[builder(default = "DEFAULT_PIVOT_TOLERANCE")]
    pub pivot_tolerance: f64,

    ///verbose printing
    #[builder(default = "false")]
    pub verbose: bool,
}

impl Default for SolverSettings {
    fn default() -> SolverSettings {
        SolverSettingsBuilder::default().build().unwrap()
    }
}

impl SolverSettings {
    /// Checks field ranges of a directly constructed settings object.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_pivot_tolerance(self.pivot_tolerance)
    }
}

impl From<SettingsError> for SolverSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        SolverSettingsBuilderError::ValidationError(e.to_string())
    }
}

impl SolverSettingsBuilder {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(tol) = self.pivot_tolerance {
            validate_pivot_tolerance(tol)?;
        }
        Ok(())
    }
}

fn validate_pivot_tolerance(tol: f64) -> Result<(), SettingsError> {
    if !tol.is_finite() || tol < 0.0 {
        return Err(SettingsError::BadFieldValue {
            field: "pivot_tolerance",
            reason: format!("{tol} is not a finite non-negative number"),
        });
    }
    Ok(())
}

#[test]
fn test_solver_settings_validate() {
    let settings = SolverSettingsBuilder::default().build().unwrap();
    assert_eq!(settings.pivot_tolerance, 1e-20);
    assert!(!settings.verbose);

    assert!(SolverSettingsBuilder::default()
        .pivot_tolerance(-1.0)
        .build()
        .is_err());
    assert!(SolverSettingsBuilder::default()
        .pivot_tolerance(f64::NAN)
        .build()
        .is_err());
    assert!(SolverSettingsBuilder::default()
        .pivot_tolerance(0.0)
        .verbose(true)
        .build()
        .is_ok());

    let settings = SolverSettings {
        pivot_tolerance: f64::INFINITY,
        ..SolverSettings::default()
    };
    assert!(matches!(
        settings.validate(),
        Err(SettingsError::BadFieldValue {
            field: "pivot_tolerance",
            ..
        })
    ));
}
