//! Error types for the dashboard core.
//!
//! - [`ValidationError`] - local input checks before a submission
//! - [`RequestError`] - transport and server failures inside uploaders
//! - [`FormError`] - edits addressing a slot or field the form does not declare
//! - [`UnknownEndpoint`] - endpoint name parsing
//!
//! A [`RequestError`] never reaches a form directly: uploaders turn it into a
//! [`crate::RequestOutcome::Failure`].

use thiserror::Error;

use crate::config::MISSING_FILES_MESSAGE;

// =============================================================================
// Validation Errors
// =============================================================================

/// Raised when a submission is attempted with an empty file slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required file slot has no file selected.
    #[error("{}", MISSING_FILES_MESSAGE)]
    MissingFile { slot: String },
}

impl ValidationError {
    /// Name of the slot that failed the check.
    pub fn slot(&self) -> &str {
        match self {
            ValidationError::MissingFile { slot } => slot,
        }
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Failures of a single network exchange.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The request could not be built or sent, or the body could not be read.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The server answered outside the 2xx range.
    #[error("Server error ({status}): {body}")]
    Status { status: u16, body: String },
}

// =============================================================================
// Form Errors
// =============================================================================

/// Edits that name an input the form does not have.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Form '{endpoint}' has no file slot named '{slot}'")]
    UnknownSlot { endpoint: String, slot: String },

    #[error("Form '{endpoint}' has no text field named '{field}'")]
    UnknownField { endpoint: String, field: String },
}

// =============================================================================
// Endpoint Errors
// =============================================================================

/// An endpoint name outside the fixed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown endpoint: {0}")]
pub struct UnknownEndpoint(pub String);

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for payload construction.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for form edits.
pub type FormResult<T> = Result<T, FormError>;
