/// HTTP client for the analysis service
///
/// The service contract is small: `POST /analyze` takes a multipart form
/// with a single `image` field and answers a JSON envelope with at least
/// `success: bool` - `analysis` carries the text on success, `error` the
/// reason on failure. A non-2xx status is treated exactly like a
/// JSON-declared failure. `GET /health` reports service liveness.

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use thiserror::Error;

use crate::state::workflow::SelectedFile;

/// Multipart field name the analysis service expects
const UPLOAD_FIELD: &str = "image";

/// Message shown when the service declares failure without details
const DEFAULT_FAILURE_MESSAGE: &str = "The analysis service reported a failure";

/// Errors produced by talking to the analysis service
///
/// All of them surface as one transient error notification; none are
/// retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyzeError {
    /// The request never produced a response
    #[error("could not reach the analysis service: {0}")]
    Unreachable(String),

    /// The service answered and declared failure (or the upload could not
    /// be prepared); the message is user-facing
    #[error("{0}")]
    Failed(String),

    /// The service answered with something that is not the envelope
    #[error("unexpected response from the analysis service: {0}")]
    Malformed(String),
}

/// JSON envelope returned by the analysis service
#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    success: bool,
    #[serde(default)]
    analysis: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Client for the analysis service
///
/// Holds one reqwest client for the application's lifetime; requests rely
/// on the platform's default timeout.
#[derive(Debug, Clone)]
pub struct AnalyzeClient {
    http: reqwest::Client,
    base_url: String,
}

impl AnalyzeClient {
    /// Create a client for the service at `base_url`
    ///
    /// The client is built once at startup; if that fails the app cannot
    /// function, so we panic with a pointer at the likely cause.
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .user_agent("ImageAnalyzer/0.1")
            .build()
            .expect("Failed to build HTTP client. Check the TLS backend.");

        Self {
            http,
            base_url: normalize_base_url(base_url.into()),
        }
    }

    /// Submit an image for analysis and return the analysis text
    pub async fn analyze(&self, file: SelectedFile) -> Result<String, AnalyzeError> {
        let part = Part::bytes(file.bytes)
            .file_name(file.filename)
            .mime_str(&file.media_type)
            .map_err(|e| AnalyzeError::Failed(format!("Could not prepare the upload: {}", e)))?;

        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .http
            .post(format!("{}/analyze", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| AnalyzeError::Unreachable(e.to_string()))?;

        let status_ok = response.status().is_success();
        let body = response
            .text()
            .await
            .map_err(|e| AnalyzeError::Unreachable(e.to_string()))?;

        parse_analysis(status_ok, &body)
    }

    /// Probe the service's health endpoint
    ///
    /// Advisory only - the workflow never gates on this.
    pub async fn health(&self) -> Result<(), AnalyzeError> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .map_err(|e| AnalyzeError::Unreachable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(AnalyzeError::Failed(format!(
                "health check returned {}",
                status
            )))
        }
    }

    /// The configured service address
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Strip trailing slashes so endpoint joining stays predictable
fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

/// Interpret the service's response body
///
/// `status_ok` is whether the HTTP status was 2xx. The service sends the
/// envelope on error statuses too, so the body is parsed either way and
/// the `error` field is preferred over a generic message.
fn parse_analysis(status_ok: bool, body: &str) -> Result<String, AnalyzeError> {
    let envelope: AnalyzeResponse = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            return if status_ok {
                Err(AnalyzeError::Malformed(e.to_string()))
            } else {
                // Error status with a non-JSON body (proxy page, etc.)
                Err(AnalyzeError::Failed(DEFAULT_FAILURE_MESSAGE.to_string()))
            };
        }
    };

    if !status_ok || !envelope.success {
        let message = envelope
            .error
            .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
        return Err(AnalyzeError::Failed(message));
    }

    envelope
        .analysis
        .ok_or_else(|| AnalyzeError::Malformed("missing analysis text".to_string()))
}
