//! # Error Types
//!
//! Structured error types for design_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! ## Example
//!
//! ```rust
//! use design_core::errors::{CalcError, CalcResult};
//!
//! fn validate_power(power_kw: f64) -> CalcResult<()> {
//!     if power_kw <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "power_kw".to_string(),
//!             value: power_kw.to_string(),
//!             reason: "Power must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for design_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for sizing operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, degenerate, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A resolved material is missing a property the calculation requires
    #[error("Material is missing required property: {property}")]
    MissingProperty { property: String },

    /// Material not found in the catalog
    #[error("Material not found: {material_id}")]
    MaterialNotFound { material_id: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingProperty error
    pub fn missing_property(property: impl Into<String>) -> Self {
        CalcError::MissingProperty {
            property: property.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_id: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_id: material_id.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingProperty { .. } => "MISSING_PROPERTY",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("spring_index", "1.0", "Spring index must exceed 1");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::missing_property("shear_stress_mpa").error_code(),
            "MISSING_PROPERTY"
        );
        assert_eq!(
            CalcError::material_not_found("unobtainium").error_code(),
            "MATERIAL_NOT_FOUND"
        );
    }

    #[test]
    fn test_display() {
        let error = CalcError::material_not_found("c99");
        assert_eq!(error.to_string(), "Material not found: c99");
    }
}
