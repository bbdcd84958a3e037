//! Error-to-HTTP response conversion.
//!
//! Route handlers return `Result<T, AppError>`; the status code comes from
//! [`smilseq_core::Error::http_status`] for translation failures.

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Why a request could not be answered with a translation.
#[derive(Debug)]
pub enum Failure {
    /// Loading or parsing the SMIL document failed.
    Translate(smilseq_core::Error),
    /// The request named no usable document (empty body, bad path).
    NotFound(String),
    /// The translation did not finish within the configured deadline.
    Timeout(Duration),
}

/// Wrapper so we can implement `IntoResponse` with request context attached.
#[derive(Debug)]
pub struct AppError {
    inner: Failure,
    request_id: Option<String>,
}

impl AppError {
    pub fn new(inner: Failure) -> Self {
        Self {
            inner,
            request_id: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(Failure::NotFound(message.into()))
    }

    pub fn with_request_id(mut self, id: String) -> Self {
        self.request_id = Some(id);
        self
    }

    pub fn status(&self) -> StatusCode {
        match &self.inner {
            Failure::Translate(e) => {
                StatusCode::from_u16(e.http_status()).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Failure::NotFound(_) => StatusCode::NOT_FOUND,
            Failure::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    pub(crate) fn code(&self) -> &'static str {
        match &self.inner {
            Failure::Translate(smilseq_core::Error::NotFound { .. }) => "not_found",
            Failure::Translate(smilseq_core::Error::MalformedDocument(_)) => "malformed_document",
            Failure::Translate(smilseq_core::Error::Internal(_)) => "internal_error",
            Failure::NotFound(_) => "not_found",
            Failure::Timeout(_) => "timeout",
        }
    }

    fn message(&self) -> String {
        match &self.inner {
            Failure::Translate(e) => e.to_string(),
            Failure::NotFound(msg) => msg.clone(),
            Failure::Timeout(limit) => {
                format!("Translation did not finish within {}s", limit.as_secs())
            }
        }
    }
}

impl From<smilseq_core::Error> for AppError {
    fn from(e: smilseq_core::Error) -> Self {
        Self::new(Failure::Translate(e))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        match &self.inner {
            Failure::Translate(smilseq_core::Error::NotFound { source, .. }) => {
                tracing::warn!(status = %status, "I/O error: {message} ({source})");
            }
            _ if status.is_server_error() => {
                tracing::error!(status = %status, error = %message, "SMIL translation failed");
            }
            _ => {
                tracing::debug!(status = %status, error = %message, "Request rejected");
            }
        }

        let body = json!({
            "error": message,
            "code": self.code(),
            "request_id": self.request_id,
        });

        (status, axum::Json(body)).into_response()
    }
}
