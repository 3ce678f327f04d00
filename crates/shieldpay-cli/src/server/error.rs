//! HTTP error responses.
//!
//! Every failure renders as `{ "error": "<message>" }`. The message is a
//! fixed, caller-safe string; the underlying cause is only logged.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{error, warn};

use shieldpay_core::{PdfError, UploadError};

pub const MISSING_FILE_MESSAGE: &str = "No file uploaded";
pub const PARSE_FAILED_MESSAGE: &str = "Failed to parse PDF";

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
    detail: String,
}

impl ApiError {
    fn new(status: StatusCode, message: &'static str, detail: impl Into<String>) -> Self {
        Self {
            status,
            message,
            detail: detail.into(),
        }
    }

    /// Extraction failed for a reason outside the parser itself.
    pub fn extraction(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, PARSE_FAILED_MESSAGE, detail)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.detail)
    }
}

impl std::error::Error for ApiError {}

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        match &err {
            UploadError::MissingFile { .. } => {
                Self::new(StatusCode::BAD_REQUEST, MISSING_FILE_MESSAGE, err.to_string())
            }
            UploadError::Malformed(_) => {
                Self::new(StatusCode::BAD_REQUEST, "Failed to read upload", err.to_string())
            }
            UploadError::TooLarge(_) => {
                Self::new(StatusCode::PAYLOAD_TOO_LARGE, "Upload too large", err.to_string())
            }
        }
    }
}

impl From<PdfError> for ApiError {
    fn from(err: PdfError) -> Self {
        Self::extraction(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status().is_server_error() {
            error!("PDF parse error: {}", self.detail);
        } else {
            warn!("Rejected upload: {}", self.detail);
        }

        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
