//! Request handlers.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{debug, info};

use shieldpay_core::models::upload::UPLOAD_FIELD;
use shieldpay_core::{ExtractionReport, UploadError, UploadedFile};

use super::error::ApiError;
use super::AppState;

/// `POST /extract`
pub async fn extract(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ExtractionReport>, ApiError> {
    let upload = receive_upload(multipart).await?;
    let size = upload.len();

    // pdf-extract is CPU-bound, keep it off the async workers
    let pipeline = state.pipeline.clone();
    let report = tokio::task::spawn_blocking(move || pipeline.process(&upload))
        .await
        .map_err(|e| ApiError::extraction(format!("extraction task failed: {}", e)))??;

    info!(
        "Extracted {} chars from {} byte upload ({} emails, {} amounts, {} ibans)",
        report.text.len(),
        size,
        report.fields.emails.len(),
        report.fields.amounts.len(),
        report.fields.ibans.len()
    );

    Ok(Json(report))
}

/// Read the first file part named `file` fully into memory.
///
/// Bodies that are not multipart at all count as a missing file. Parts with
/// other names, and `file` parts sent as plain form values (no filename), are
/// skipped.
async fn receive_upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<UploadedFile, UploadError> {
    let missing = || UploadError::MissingFile {
        field: UPLOAD_FIELD.to_string(),
    };

    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            debug!("Not a multipart request: {}", rejection.body_text());
            return Err(missing());
        }
    };

    while let Some(field) = multipart.next_field().await.map_err(read_error)? {
        let name = field.name().map(str::to_string);
        if name.as_deref() != Some(UPLOAD_FIELD) || field.file_name().is_none() {
            debug!("Skipping multipart field {:?}", name);
            continue;
        }

        let data = field.bytes().await.map_err(read_error)?;
        return Ok(UploadedFile::new(data.to_vec(), UPLOAD_FIELD));
    }

    Err(missing())
}

fn read_error(err: axum::extract::multipart::MultipartError) -> UploadError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UploadError::TooLarge(err.body_text())
    } else {
        UploadError::Malformed(err.body_text())
    }
}
