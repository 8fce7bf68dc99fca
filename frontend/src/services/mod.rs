//! Backend communication.
//!
//! - [`upload`] - file reading and multipart upload to the plotting backend

pub mod upload;

pub use upload::*;
