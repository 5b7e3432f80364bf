//! # Error Types
//!
//! Structured error types for blast_core. Each variant carries enough context
//! for a caller to report the problem precisely or handle it programmatically,
//! instead of parsing a message string.
//!
//! ## Example
//!
//! ```rust
//! use blast_core::errors::{BlastError, BlastResult};
//!
//! fn validate_powder_factor(powder_factor: f64) -> BlastResult<()> {
//!     if powder_factor <= 0.0 {
//!         return Err(BlastError::InvalidInput {
//!             field: "powder_factor".to_string(),
//!             value: powder_factor.to_string(),
//!             reason: "Powder factor must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for blast_core operations
pub type BlastResult<T> = Result<T, BlastError>;

/// Structured error type for blast design evaluation.
///
/// Two failure kinds exist: the request itself is unusable (`InvalidInput`),
/// or every candidate was disqualified and no design could be selected
/// (`NoSelection`).
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BlastError {
    /// An input value is invalid (out of range, non-finite, empty list, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// No candidate option produced a usable design
    #[error("No valid selection: {reason}")]
    NoSelection { reason: String },
}

impl BlastError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        BlastError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a NoSelection error
    pub fn no_selection(reason: impl Into<String>) -> Self {
        BlastError::NoSelection {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BlastError::InvalidInput { .. } => "INVALID_INPUT",
            BlastError::NoSelection { .. } => "NO_SELECTION",
        }
    }
}
