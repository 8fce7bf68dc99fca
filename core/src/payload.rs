//! Multipart payload construction.
//!
//! [`build`] is the only place where inputs are validated: every slot must
//! hold a file. The resulting [`SubmissionPayload`] is transport-neutral;
//! uploaders translate its [`Part`]s into their own multipart form type.
//!
//! Part order: file parts (slot order), text parts (declaration order),
//! `createPPT`, `saveProject`, `lastModified`.

use chrono::SecondsFormat;

use crate::config::{UploadConfig, CREATE_PPT_PART, LAST_MODIFIED_PART, SAVE_PROJECT_PART};
use crate::error::{ValidationError, ValidationResult};
use crate::models::{DataFile, FileSlot, TextField};

/// One multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    File { name: String, file: DataFile },
    Text { name: String, value: String },
}

impl Part {
    pub fn name(&self) -> &str {
        match self {
            Part::File { name, .. } | Part::Text { name, .. } => name,
        }
    }

    fn text(name: &str, value: impl Into<String>) -> Self {
        Part::Text {
            name: name.to_string(),
            value: value.into(),
        }
    }
}

/// A fully assembled request body for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    parts: Vec<Part>,
}

impl SubmissionPayload {
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<Part> {
        self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Part names in wire order.
    pub fn part_names(&self) -> Vec<&str> {
        self.parts.iter().map(Part::name).collect()
    }

    /// Value of the first text part called `name`.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            Part::Text { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// File of the first file part called `name`.
    pub fn file(&self, name: &str) -> Option<&DataFile> {
        self.parts.iter().find_map(|part| match part {
            Part::File { name: n, file } if n == name => Some(file),
            _ => None,
        })
    }
}

/// Assemble the payload for one submission.
///
/// Fails with [`ValidationError::MissingFile`] naming the first empty slot.
pub fn build(
    slots: &[FileSlot],
    fields: &[TextField],
    config: UploadConfig,
) -> ValidationResult<SubmissionPayload> {
    let mut files = Vec::with_capacity(slots.len());
    for slot in slots {
        match &slot.file {
            Some(file) => files.push((slot.name, file)),
            None => {
                return Err(ValidationError::MissingFile {
                    slot: slot.name.to_string(),
                })
            }
        }
    }

    let last_modified = files
        .first()
        .map(|(_, file)| file.last_modified.to_rfc3339_opts(SecondsFormat::Millis, true));

    let mut parts = Vec::with_capacity(files.len() + fields.len() + 3);
    parts.extend(files.into_iter().map(|(name, file)| Part::File {
        name: name.to_string(),
        file: file.clone(),
    }));
    parts.extend(fields.iter().map(|field| Part::text(field.key, field.value.as_str())));
    parts.push(Part::text(CREATE_PPT_PART, config.generate_slideshow.to_string()));
    parts.push(Part::text(SAVE_PROJECT_PART, config.save_project.to_string()));
    if let Some(timestamp) = last_modified {
        parts.push(Part::text(LAST_MODIFIED_PART, timestamp));
    }

    Ok(SubmissionPayload { parts })
}
