//! # Error Types
//!
//! One error enum for the whole engine. Numeric failures say which field or
//! integration step is at fault so a front end can point at the bad input.
//!
//! ## Example
//!
//! ```rust
//! use griffith_core::errors::{GriffithError, GriffithResult};
//!
//! fn check_stress(stress_mpa: f64) -> GriffithResult<f64> {
//!     if stress_mpa <= 0.0 {
//!         return Err(GriffithError::invalid_input("stress_range", stress_mpa.to_string(), "must be positive"));
//!     }
//!     Ok(stress_mpa)
//! }
//!
//! let err = check_stress(-5.0).unwrap_err();
//! assert_eq!(err.error_code(), "INVALID_INPUT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for griffith_core operations
pub type GriffithResult<T> = Result<T, GriffithError>;

/// Everything that can go wrong in a calculation or project file operation.
///
/// Serializes as `{"type": "...", "details": {...}}` for JSON consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum GriffithError {
    /// A parameter breaks its invariant (non-positive, non-finite, a₀ ≥ a_f, ...).
    /// Raised before any numeric work starts.
    #[error("Invalid value {value} for '{field}': {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// da/dN came out zero, negative or non-finite during integration.
    /// `step` is the first offending sub-interval, `crack_length` its left edge.
    #[error("Growth rate degenerate at step {step}, a = {crack_length} m (da/dN = {rate})")]
    DegenerateRate {
        step: usize,
        crack_length: f64,
        rate: f64,
    },

    /// An optional property the calculation needs was not supplied
    #[error("Required property '{field}' is not defined")]
    MissingField { field: String },

    #[error("Unknown material preset '{material_name}'")]
    MaterialNotFound { material_name: String },

    /// The model has no answer for this configuration
    #[error("{calculation_type} is not defined here: {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    #[error("Could not {operation} '{path}': {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    #[error("'{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    #[error("JSON error: {reason}")]
    SerializationError { reason: String },

    /// Project file written by an incompatible schema
    #[error("Project schema {file_version} cannot be read by schema {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl GriffithError {
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        GriffithError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn degenerate_rate(step: usize, crack_length: f64, rate: f64) -> Self {
        GriffithError::DegenerateRate {
            step,
            crack_length,
            rate,
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        GriffithError::MissingField { field: field.into() }
    }

    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        GriffithError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        GriffithError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        GriffithError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn file_locked(path: impl Into<String>, locked_by: impl Into<String>, locked_at: impl Into<String>) -> Self {
        GriffithError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// Only a held lock can clear up on its own. Calculations are
    /// deterministic, so a numeric failure repeats until the input changes.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GriffithError::FileLocked { .. })
    }

    /// The field or step a user should look at, if the error names one
    pub fn culprit(&self) -> Option<String> {
        match self {
            GriffithError::InvalidInput { field, .. } | GriffithError::MissingField { field } => Some(field.clone()),
            GriffithError::DegenerateRate { step, .. } => Some(format!("step {}", step)),
            _ => None,
        }
    }

    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            GriffithError::InvalidInput { .. } => "INVALID_INPUT",
            GriffithError::DegenerateRate { .. } => "DEGENERATE_RATE",
            GriffithError::MissingField { .. } => "MISSING_FIELD",
            GriffithError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            GriffithError::CalculationFailed { .. } => "CALCULATION_FAILED",
            GriffithError::FileError { .. } => "FILE_ERROR",
            GriffithError::FileLocked { .. } => "FILE_LOCKED",
            GriffithError::SerializationError { .. } => "SERIALIZATION_ERROR",
            GriffithError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for GriffithError {
    fn from(e: serde_json::Error) -> Self {
        GriffithError::SerializationError { reason: e.to_string() }
    }
}

/// Reject NaN and infinities, then require `value > 0`.
pub(crate) fn require_positive(field: &str, value: f64) -> GriffithResult<()> {
    if !value.is_finite() {
        return Err(GriffithError::invalid_input(field, value.to_string(), "must be finite"));
    }
    if value <= 0.0 {
        return Err(GriffithError::invalid_input(field, value.to_string(), "must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_roundtrip() {
        let error = GriffithError::invalid_input("initial_length", "-0.005", "must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: GriffithError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_degenerate_rate_json_shape() {
        let error = GriffithError::degenerate_rate(0, 0.005, 0.0);
        let value: serde_json::Value = serde_json::to_value(&error).unwrap();
        assert_eq!(value["type"], "DegenerateRate");
        assert_eq!(value["details"]["step"], 0);
        assert_eq!(value["details"]["crack_length"], 0.005);
    }

    #[test]
    fn test_display_names_step() {
        let message = GriffithError::degenerate_rate(7, 0.01, 0.0).to_string();
        assert!(message.contains("step 7"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(GriffithError::missing_field("k_ic").error_code(), "MISSING_FIELD");
        assert_eq!(GriffithError::material_not_found("unobtanium").error_code(), "MATERIAL_NOT_FOUND");
        assert_eq!(GriffithError::degenerate_rate(3, 0.01, f64::INFINITY).error_code(), "DEGENERATE_RATE");
    }

    #[test]
    fn test_culprit() {
        assert_eq!(GriffithError::missing_field("k_ic").culprit().as_deref(), Some("k_ic"));
        assert_eq!(GriffithError::degenerate_rate(2, 0.01, 0.0).culprit().as_deref(), Some("step 2"));
        assert_eq!(GriffithError::file_locked("a.grf", "x", "y").culprit(), None);
    }

    #[test]
    fn test_numeric_errors_not_recoverable() {
        assert!(!GriffithError::degenerate_rate(0, 0.01, 0.0).is_recoverable());
        assert!(!GriffithError::invalid_input("m", "0", "must be positive").is_recoverable());
        assert!(GriffithError::file_locked("a.grf", "someone", "now").is_recoverable());
    }

    #[test]
    fn test_from_json_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err: GriffithError = parse_err.into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("c", 1e-12).is_ok());
        assert!(require_positive("c", 0.0).is_err());
        assert!(require_positive("c", f64::NAN).is_err());
        assert!(require_positive("c", f64::INFINITY).is_err());
    }
}
