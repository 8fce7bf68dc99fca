//! Client configuration.
//!
//! The backend address comes from, in order: the `--url` flag, the
//! `LABDASH_BACKEND_URL` variable (process environment or `.env`), the
//! built-in default.

use std::env;

use labdash::{UploadConfig, DEFAULT_BACKEND_URL};

/// Environment variable overriding the backend base address.
pub const BACKEND_URL_ENV: &str = "LABDASH_BACKEND_URL";

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base address of the plotting backend.
    pub backend_url: String,
    /// Toggles sent with every submission.
    pub upload: UploadConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            upload: UploadConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Defaults with the backend address taken from the environment.
    pub fn from_env() -> Self {
        // Try loading .env file
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup(BACKEND_URL_ENV).filter(|url| !url.trim().is_empty()) {
            config.backend_url = url.trim().to_string();
        }
        config
    }

    pub fn with_backend_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.backend_url = url;
        }
        self
    }

    pub fn with_upload(mut self, upload: UploadConfig) -> Self {
        self.upload = upload;
        self
    }
}
