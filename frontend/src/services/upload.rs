//! Browser upload service: `File` reading and multipart POST via gloo-net.

use chrono::{DateTime, Utc};
use gloo_net::http::Request;
use js_sys::{Array, Uint8Array};
use labdash::{endpoint_url, DataFile, Endpoint, Part, RequestError, RequestOutcome, SubmissionPayload, Uploader};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, File, FormData};

use crate::config::BACKEND_URL;

/// Read a selected browser file into memory.
pub async fn read_data_file(file: &File) -> Result<DataFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read {}: {:?}", file.name(), e))?;
    let bytes = Uint8Array::new(&buffer).to_vec();

    let last_modified =
        DateTime::<Utc>::from_timestamp_millis(file.last_modified() as i64).unwrap_or_else(Utc::now);

    Ok(DataFile::new(file.name(), bytes, last_modified))
}

/// Posts payloads with `fetch`. The browser imposes no timeout on it.
#[derive(Debug, Clone)]
pub struct BrowserUploader {
    base_url: String,
}

impl Default for BrowserUploader {
    fn default() -> Self {
        Self::new(BACKEND_URL)
    }
}

impl BrowserUploader {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn form_data(payload: SubmissionPayload) -> Result<FormData, RequestError> {
        let form_data = FormData::new()
            .map_err(|e| RequestError::Transport(format!("Failed to create FormData: {:?}", e)))?;

        for part in payload.into_parts() {
            match part {
                Part::File { name, file } => {
                    let bytes = Uint8Array::from(file.bytes.as_slice());
                    let blob = Blob::new_with_u8_array_sequence(&Array::of1(&bytes))
                        .map_err(|e| RequestError::Transport(format!("Failed to create Blob: {:?}", e)))?;
                    form_data
                        .append_with_blob_and_filename(&name, &blob, &file.name)
                        .map_err(|e| RequestError::Transport(format!("Failed to append file: {:?}", e)))?;
                }
                Part::Text { name, value } => {
                    form_data
                        .append_with_str(&name, &value)
                        .map_err(|e| RequestError::Transport(format!("Failed to append {}: {:?}", name, e)))?;
                }
            }
        }
        Ok(form_data)
    }

    async fn post(&self, endpoint: Endpoint, payload: SubmissionPayload) -> Result<(u16, String), RequestError> {
        let url = endpoint_url(&self.base_url, endpoint);

        // The browser sets the multipart boundary in Content-Type.
        let request = Request::post(&url)
            .body(Self::form_data(payload)?)
            .map_err(|e| RequestError::Transport(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_else(|e| {
            log::warn!("⚠️ Could not read reply body from {}: {}", url, e);
            String::new()
        });
        Ok((status, body))
    }
}

impl Uploader for BrowserUploader {
    async fn submit(&self, endpoint: Endpoint, payload: SubmissionPayload) -> RequestOutcome {
        match self.post(endpoint, payload).await {
            Ok((status, body)) => RequestOutcome::from_response(status, &body),
            Err(err) => RequestOutcome::from_transport_error(&err),
        }
    }
}
