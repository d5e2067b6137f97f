//! The single point of contact with the analysis service.
//!
//! File input goes to `POST /api/analyze` as multipart, text input goes to
//! `POST /api/analyze-text` as JSON. Both answer with a `ResultDocument` or an
//! `{"error": "..."}` payload.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{multipart, Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::input::{CapturedInput, FileInput};
use crate::models::ResultDocument;

pub const ANALYZE_FILE_PATH: &str = "/api/analyze";
pub const ANALYZE_TEXT_PATH: &str = "/api/analyze-text";
/// Shown when the service gives no usable message.
pub const GENERIC_FAILURE: &str = "Analysis failed";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AnalysisError {
    pub message: String,
}

impl AnalysisError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn generic() -> Self {
        Self::new(GENERIC_FAILURE)
    }
}

/// Submits captured input for analysis. Implement this to swap transports
/// without touching the view controller.
#[async_trait]
pub trait AnalysisGateway: Send + Sync {
    async fn analyze(&self, input: &CapturedInput) -> Result<ResultDocument, AnalysisError>;
}

#[derive(Debug, Serialize)]
struct TextRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorPayload {
    error: Option<String>,
}

/// HTTP gateway to the analysis service.
#[derive(Clone)]
pub struct HttpAnalysisGateway {
    client: Client,
    base_url: String,
}

impl HttpAnalysisGateway {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn file_request(&self, file: &FileInput) -> Result<RequestBuilder, AnalysisError> {
        let part = multipart::Part::bytes(file.bytes.to_vec())
            .file_name(file.name.clone())
            .mime_str(file.mime_type())
            .map_err(|e| {
                warn!("Failed to build multipart body: {e}");
                AnalysisError::generic()
            })?;
        let form = multipart::Form::new().part("file", part);
        Ok(self
            .client
            .post(self.url(ANALYZE_FILE_PATH))
            .multipart(form))
    }

    fn text_request(&self, text: &str) -> RequestBuilder {
        self.client
            .post(self.url(ANALYZE_TEXT_PATH))
            .json(&TextRequest { text })
    }

    async fn send(&self, request: RequestBuilder) -> Result<ResultDocument, AnalysisError> {
        let response = request.send().await.map_err(|e| {
            warn!("Analysis request failed: {e}");
            AnalysisError::generic()
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            warn!("Failed to read analysis response body: {e}");
            AnalysisError::generic()
        })?;

        if !status.is_success() {
            let message = server_message(&body).unwrap_or_else(|| GENERIC_FAILURE.to_string());
            warn!("Analysis service returned {status}: {message}");
            return Err(AnalysisError::new(message));
        }

        match serde_json::from_str::<ResultDocument>(&body) {
            Ok(doc) => {
                debug!(
                    "Analysis succeeded: score={}, skills={}, suggestions={}",
                    doc.overall_rating.score,
                    doc.skills.len(),
                    doc.suggestions.len()
                );
                Ok(doc)
            }
            Err(e) => {
                // The service may report an error with a success status.
                if let Some(message) = server_message(&body) {
                    warn!("Analysis service reported an error: {message}");
                    return Err(AnalysisError::new(message));
                }
                warn!("Malformed analysis response: {e}");
                Err(AnalysisError::generic())
            }
        }
    }
}

/// Extracts a non-empty `error` message from a response body.
fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorPayload>(body)
        .ok()
        .and_then(|p| p.error)
        .filter(|m| !m.trim().is_empty())
}

#[async_trait]
impl AnalysisGateway for HttpAnalysisGateway {
    async fn analyze(&self, input: &CapturedInput) -> Result<ResultDocument, AnalysisError> {
        let request = match input {
            CapturedInput::File(file) => {
                info!("Submitting file '{}' ({} bytes)", file.name, file.bytes.len());
                self.file_request(file)?
            }
            CapturedInput::Text(text) => {
                info!("Submitting pasted text ({} chars)", text.chars().count());
                self.text_request(text)
            }
            CapturedInput::Empty => return Err(AnalysisError::new("No input provided")),
        };
        self.send(request).await
    }
}
