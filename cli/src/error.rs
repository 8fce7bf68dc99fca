//! Error types for the command line client.
//!
//! Conversions from the core errors and from I/O are automatic, so `?`
//! works across the whole command path.

use labdash::{FormError, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Failed to read a data file.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A required file slot was left empty.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A field or slot the form does not declare.
    #[error("{0}")]
    Form(#[from] FormError),

    /// Bad command line input.
    #[error("Invalid arguments: {0}")]
    Usage(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend reported a failure.
    #[error("{0}")]
    Rejected(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
