//! Form inputs: selected files, file slots and text fields.

use chrono::{DateTime, Utc};
use std::fmt;

// =============================================================================
// Files
// =============================================================================

/// Content and metadata of one selected data file.
#[derive(Clone, PartialEq, Eq)]
pub struct DataFile {
    /// File name as chosen by the user (no directory part).
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Modification time reported by the file system or browser.
    pub last_modified: DateTime<Utc>,
    /// Raw content.
    pub bytes: Vec<u8>,
}

impl DataFile {
    /// Build a file whose size is the length of `bytes`.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>, last_modified: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            size: bytes.len() as u64,
            last_modified,
            bytes,
        }
    }
}

// Instrument files run to megabytes; keep them out of debug output.
impl fmt::Debug for DataFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataFile")
            .field("name", &self.name)
            .field("size", &self.size)
            .field("last_modified", &self.last_modified)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Slots and fields
// =============================================================================

/// A named required file input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSlot {
    /// Multipart part name.
    pub name: &'static str,
    /// Label shown next to the input.
    pub label: &'static str,
    pub file: Option<DataFile>,
}

impl FileSlot {
    pub fn empty(name: &'static str, label: &'static str) -> Self {
        Self { name, label, file: None }
    }

    pub fn is_filled(&self) -> bool {
        self.file.is_some()
    }
}

/// A named free-text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    /// Multipart part name.
    pub key: &'static str,
    pub placeholder: &'static str,
    pub value: String,
}

impl TextField {
    pub fn empty(key: &'static str, placeholder: &'static str) -> Self {
        Self {
            key,
            placeholder,
            value: String::new(),
        }
    }
}
