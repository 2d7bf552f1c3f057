//! # Error Types
//!
//! Structured error type for beam_core. Every public operation validates its
//! inputs up front and reports the offending parameter, the rejected value and
//! the constraint it broke, so a caller can correct the input without guessing.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length: f64) -> CalcResult<()> {
//!     if length <= 0.0 {
//!         return Err(CalcError::invalid_configuration(
//!             "length",
//!             length.to_string(),
//!             "Beam length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_length(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for beam analysis operations.
///
/// All computations are deterministic and synchronous, so the only way an
/// operation fails is a configuration that violates its preconditions.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Non-positive length or magnitude, out-of-span position, spacing outside
    /// `(0, L)`, a bad sampling grid, or a load sitting on an influence-line
    /// discontinuity.
    #[error("Invalid configuration for '{field}': {value} - {reason}")]
    InvalidConfiguration {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    /// Create an InvalidConfiguration error
    pub fn invalid_configuration(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidConfiguration {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Name of the parameter that was rejected
    pub fn field(&self) -> &str {
        match self {
            CalcError::InvalidConfiguration { field, .. } => field,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
        }
    }
}
