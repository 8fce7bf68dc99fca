//! The `submit` command: bind files and fields to a form, then upload.

use std::path::PathBuf;

use labdash::{spec_for, DashboardShell, Endpoint, RequestOutcome, Uploader};

use crate::error::{ClientError, ClientResult};
use crate::files::load_data_file;

/// Inputs of one `labdash submit` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub endpoint: Endpoint,
    /// Files in slot order.
    pub files: Vec<PathBuf>,
    /// `(key, value)` pairs for text fields.
    pub fields: Vec<(String, String)>,
}

/// Split `key=value`. The value may itself contain `=`.
pub fn parse_field(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected key=value, got '{}'", arg)),
    }
}

/// Fill the form for `request.endpoint` and submit it.
///
/// Slots left without a file fail validation before any network call.
pub async fn run_submit<U: Uploader>(
    shell: &mut DashboardShell,
    uploader: &U,
    request: SubmitRequest,
) -> ClientResult<RequestOutcome> {
    let spec = spec_for(request.endpoint);
    if request.files.len() > spec.slots.len() {
        let expected: Vec<_> = spec.slots.iter().map(|s| s.name).collect();
        return Err(ClientError::Usage(format!(
            "/{} takes {} file(s) ({}), got {}",
            request.endpoint,
            spec.slots.len(),
            expected.join(", "),
            request.files.len()
        )));
    }

    let mut files = Vec::with_capacity(request.files.len());
    for path in &request.files {
        let file = load_data_file(path).await?;
        eprintln!("📄 {} ({} bytes)", file.name, file.size);
        files.push(file);
    }

    let form = shell
        .form_mut(request.endpoint)
        .ok_or_else(|| ClientError::Usage(format!("no form for /{}", request.endpoint)))?;
    for (slot, file) in spec.slots.iter().zip(files) {
        form.select_file(slot.name, Some(file))?;
    }
    for (key, value) in &request.fields {
        form.set_text(key, value.as_str())?;
    }

    eprintln!("📤 Uploading to /{}...", request.endpoint);
    shell
        .submit(request.endpoint, uploader)
        .await?
        .ok_or_else(|| ClientError::Usage(format!("/{} is already submitting", request.endpoint)))
}
