//! Dashboard configuration.
//!
//! Compile-time defaults shared by every frontend, plus the session-wide
//! [`UploadConfig`] toggles.

/// Default plotting backend base address.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Shown when a submission is attempted with an empty file slot.
pub const MISSING_FILES_MESSAGE: &str = "Please select all required files.";

/// Shown on success when the server did not supply a `message`.
pub const SUCCESS_FALLBACK_MESSAGE: &str = "Operation Successful";

/// Shown on failure when the server did not supply an `error`.
pub const FAILURE_FALLBACK_MESSAGE: &str = "Failed. Check console.";

/// Multipart part names for the toggles and the derived timestamp.
pub const CREATE_PPT_PART: &str = "createPPT";
pub const SAVE_PROJECT_PART: &str = "saveProject";
pub const LAST_MODIFIED_PART: &str = "lastModified";

/// Optional server-side artifacts requested with every upload.
///
/// Forms receive a copy at submit time; later toggles never reach a payload
/// that has already been built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadConfig {
    /// Ask the backend to build a PowerPoint slideshow (`createPPT`).
    pub generate_slideshow: bool,
    /// Ask the backend to save the Origin project (`saveProject`).
    pub save_project: bool,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            generate_slideshow: true,
            save_project: true,
        }
    }
}

impl UploadConfig {
    pub fn with_generate_slideshow(mut self, enabled: bool) -> Self {
        self.generate_slideshow = enabled;
        self
    }

    pub fn with_save_project(mut self, enabled: bool) -> Self {
        self.save_project = enabled;
        self
    }
}
