//! Application configuration.
//!
//! The page talks to a plotting backend on the same machine. Change
//! [`BACKEND_URL`] when the backend runs elsewhere.

/// Plotting backend base URL.
pub const BACKEND_URL: &str = labdash::DEFAULT_BACKEND_URL;

/// Browser tab title.
pub const PAGE_TITLE: &str = labdash::dashboard::APP_TITLE;
