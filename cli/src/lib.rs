//! # labdash-cli - Command line uploads to the plotting backend
//!
//! Native counterpart of the browser dashboard. It drives the same
//! [`labdash::DashboardShell`] and forms, and sends payloads with reqwest.
//!
//! ## Modules
//!
//! - [`error`] - Client error type
//! - [`config`] - Backend address and toggles
//! - [`files`] - Loading data files from disk
//! - [`http`] - [`HttpUploader`]
//! - [`submit`] - The `submit` command

pub mod config;
pub mod error;
pub mod files;
pub mod http;
pub mod submit;

pub use config::{ClientConfig, BACKEND_URL_ENV, DEFAULT_LOG_FILTER};
pub use error::{ClientError, ClientResult};
pub use files::load_data_file;
pub use http::HttpUploader;
pub use submit::{parse_field, run_submit, SubmitRequest};
