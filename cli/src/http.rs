//! reqwest implementation of [`Uploader`].

use labdash::{endpoint_url, Endpoint, Part, RequestError, RequestOutcome, SubmissionPayload, Uploader};
use reqwest::multipart;

use crate::error::ClientResult;

/// Posts payloads to the plotting backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpUploader {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUploader {
    /// Client for the backend at `base_url`.
    ///
    /// No request timeout is configured: a plotting job may keep the
    /// connection open for as long as the backend needs.
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn multipart_form(payload: SubmissionPayload) -> multipart::Form {
        payload
            .into_parts()
            .into_iter()
            .fold(multipart::Form::new(), |form, part| match part {
                Part::File { name, file } => {
                    form.part(name, multipart::Part::bytes(file.bytes).file_name(file.name))
                }
                Part::Text { name, value } => form.text(name, value),
            })
    }

    /// One POST; returns the status and raw body.
    async fn post(
        &self,
        endpoint: Endpoint,
        payload: SubmissionPayload,
    ) -> Result<(u16, String), RequestError> {
        let url = endpoint_url(&self.base_url, endpoint);
        log::debug!("POST {} ({} parts)", url, payload.len());

        let response = self
            .client
            .post(&url)
            .multipart(Self::multipart_form(payload))
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_else(|e| {
            log::warn!("⚠️ Could not read reply body from {}: {}", url, e);
            String::new()
        });
        Ok((status, body))
    }
}

impl Uploader for HttpUploader {
    async fn submit(&self, endpoint: Endpoint, payload: SubmissionPayload) -> RequestOutcome {
        match self.post(endpoint, payload).await {
            Ok((status, body)) => RequestOutcome::from_response(status, &body),
            Err(err) => RequestOutcome::from_transport_error(&err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Multipart, Path, State},
        http::{header, HeaderMap, StatusCode},
        routing::post,
        Router,
    };
    use chrono::{TimeZone, Utc};
    use labdash::{DashboardShell, DataFile, UploadConfig};
    use std::sync::{Arc, Mutex};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    #[derive(Debug, Clone)]
    struct CapturedPart {
        name: String,
        file_name: Option<String>,
        data: Vec<u8>,
    }

    impl CapturedPart {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.data).into_owned()
        }
    }

    #[derive(Debug, Clone)]
    struct CapturedRequest {
        endpoint: String,
        content_type: String,
        parts: Vec<CapturedPart>,
    }

    impl CapturedRequest {
        fn names(&self) -> Vec<&str> {
            self.parts.iter().map(|p| p.name.as_str()).collect()
        }

        fn part(&self, name: &str) -> &CapturedPart {
            self.parts
                .iter()
                .find(|p| p.name == name)
                .unwrap_or_else(|| panic!("no part named {name}"))
        }
    }

    /// Stand-in for the plotting server: records requests, answers with a
    /// fixed status and body.
    #[derive(Clone)]
    struct FakeBackend {
        status: StatusCode,
        body: &'static str,
        requests: Arc<Mutex<Vec<CapturedRequest>>>,
    }

    impl FakeBackend {
        fn requests(&self) -> Vec<CapturedRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    async fn record(
        State(backend): State<FakeBackend>,
        Path(endpoint): Path<String>,
        headers: HeaderMap,
        mut multipart: Multipart,
    ) -> (StatusCode, String) {
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let mut parts = Vec::new();
        while let Some(field) = multipart.next_field().await.unwrap() {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().map(str::to_string);
            let data = field.bytes().await.unwrap().to_vec();
            parts.push(CapturedPart { name, file_name, data });
        }

        backend.requests.lock().unwrap().push(CapturedRequest {
            endpoint,
            content_type,
            parts,
        });
        (backend.status, backend.body.to_string())
    }

    async fn spawn_backend(status: StatusCode, body: &'static str) -> (String, FakeBackend) {
        let backend = FakeBackend {
            status,
            body,
            requests: Arc::new(Mutex::new(Vec::new())),
        };
        let app = Router::new()
            .route("/{endpoint}", post(record))
            .with_state(backend.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", addr), backend)
    }

    /// Accepts one request and answers 200 with a body shorter than its
    /// `Content-Length`, then hangs up.
    async fn spawn_truncating_backend() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request_complete(&request) {
                    break;
                }
            }
            socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 64\r\n\r\n{\"message\":")
                .await
                .unwrap();
        });
        format!("http://{}", addr)
    }

    fn request_complete(request: &[u8]) -> bool {
        let Some(head_end) = request.windows(4).position(|w| w == b"\r\n\r\n") else {
            return false;
        };
        let head = String::from_utf8_lossy(&request[..head_end]).to_ascii_lowercase();
        let body = &request[head_end + 4..];
        match head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|len| len.trim().parse::<usize>().ok())
        {
            Some(len) => body.len() >= len,
            None => body.ends_with(b"0\r\n\r\n"),
        }
    }

    fn data_file(name: &str, content: &str) -> DataFile {
        let modified = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        DataFile::new(name, content.as_bytes().to_vec(), modified)
    }

    #[tokio::test]
    async fn test_single_file_form_posts_expected_parts() {
        let (url, backend) = spawn_backend(StatusCode::OK, r#"{"message":"Plotted ppms"}"#).await;
        let uploader = HttpUploader::new(url).unwrap();

        let mut shell = DashboardShell::new();
        let form = shell.form_mut(Endpoint::Ppms).unwrap();
        form.select_file("datafile", Some(data_file("r_vs_t.dat", "300,12.5\n")))
            .unwrap();
        form.set_text("pressure", "2.5").unwrap();

        let outcome = shell.submit(Endpoint::Ppms, &uploader).await.unwrap();
        assert_eq!(outcome, Some(RequestOutcome::Success("Plotted ppms".into())));

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.endpoint, "ppms");
        assert!(request.content_type.starts_with("multipart/form-data"));
        assert_eq!(
            request.names(),
            ["datafile", "pressure", "createPPT", "saveProject", "lastModified"]
        );

        let datafile = request.part("datafile");
        assert_eq!(datafile.file_name.as_deref(), Some("r_vs_t.dat"));
        assert_eq!(datafile.text(), "300,12.5\n");
        assert_eq!(request.part("pressure").text(), "2.5");
        assert_eq!(request.part("createPPT").text(), "true");
        assert_eq!(request.part("saveProject").text(), "true");
        assert_eq!(request.part("lastModified").text(), "2024-03-01T09:30:00.000Z");
    }

    #[tokio::test]
    async fn test_dual_form_posts_both_files() {
        let (url, backend) = spawn_backend(StatusCode::OK, r#"{"message":"ok"}"#).await;
        let uploader = HttpUploader::new(format!("{}/", url)).unwrap();

        let mut shell = DashboardShell::with_config(UploadConfig::default().with_save_project(false));
        let form = shell.form_mut(Endpoint::Dewar).unwrap();
        form.select_file("cooling", Some(data_file("cool.dat", "c"))).unwrap();
        form.select_file("warming", Some(data_file("warm.dat", "w"))).unwrap();

        shell.submit(Endpoint::Dewar, &uploader).await.unwrap();

        let requests = backend.requests();
        let request = &requests[0];
        assert_eq!(request.endpoint, "dewar");
        assert_eq!(request.part("cooling").file_name.as_deref(), Some("cool.dat"));
        assert_eq!(request.part("warming").file_name.as_deref(), Some("warm.dat"));
        assert_eq!(request.part("pressure").text(), "");
        assert_eq!(request.part("saveProject").text(), "false");
    }

    #[tokio::test]
    async fn test_missing_warming_file_sends_nothing() {
        let (url, backend) = spawn_backend(StatusCode::OK, "{}").await;
        let uploader = HttpUploader::new(url).unwrap();

        let mut shell = DashboardShell::new();
        let form = shell.form_mut(Endpoint::Dewar).unwrap();
        form.select_file("cooling", Some(data_file("cool.dat", "c"))).unwrap();

        let result = shell.submit(Endpoint::Dewar, &uploader).await;

        assert!(result.is_err());
        assert!(backend.requests().is_empty());
        assert!(!shell.form(Endpoint::Dewar).unwrap().is_submitting());
    }

    #[tokio::test]
    async fn test_server_error_message_is_reported_verbatim() {
        let (url, _backend) =
            spawn_backend(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":"disk full"}"#).await;
        let uploader = HttpUploader::new(url).unwrap();

        let mut shell = DashboardShell::new();
        let form = shell.form_mut(Endpoint::MpmsAc).unwrap();
        form.select_file("datafile", Some(data_file("ac.dat", "f"))).unwrap();

        let outcome = shell.submit(Endpoint::MpmsAc, &uploader).await.unwrap().unwrap();

        assert_eq!(outcome, RequestOutcome::Failure("disk full".into()));
        let form = shell.form(Endpoint::MpmsAc).unwrap();
        assert!(!form.is_submitting());
        assert_eq!(form.notice().unwrap().text(), "Error: disk full");
    }

    #[tokio::test]
    async fn test_empty_success_falls_back_to_generic_text() {
        let (url, _backend) = spawn_backend(StatusCode::OK, "{}").await;
        let uploader = HttpUploader::new(url).unwrap();

        let mut shell = DashboardShell::new();
        let form = shell.form_mut(Endpoint::Mpms).unwrap();
        form.select_file("datafile", Some(data_file("m.dat", "m"))).unwrap();

        let outcome = shell.submit(Endpoint::Mpms, &uploader).await.unwrap().unwrap();
        assert_eq!(outcome, RequestOutcome::Success("Operation Successful".into()));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_generic_failure() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let uploader = HttpUploader::new(format!("http://{}", addr)).unwrap();
        let mut shell = DashboardShell::new();
        let form = shell.form_mut(Endpoint::CurrentEffect).unwrap();
        form.select_file("datafile", Some(data_file("i.dat", "i"))).unwrap();

        let outcome = shell
            .submit(Endpoint::CurrentEffect, &uploader)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(outcome, RequestOutcome::Failure("Failed. Check console.".into()));
        assert!(!shell.form(Endpoint::CurrentEffect).unwrap().is_submitting());
    }

    #[tokio::test]
    async fn test_unreadable_body_keeps_status_outcome() {
        let uploader = HttpUploader::new(spawn_truncating_backend().await).unwrap();
        let mut shell = DashboardShell::new();
        let form = shell.form_mut(Endpoint::Ppms).unwrap();
        form.select_file("datafile", Some(data_file("r.dat", "r"))).unwrap();

        let outcome = shell.submit(Endpoint::Ppms, &uploader).await.unwrap().unwrap();

        assert_eq!(outcome, RequestOutcome::Success("Operation Successful".into()));
    }
}
