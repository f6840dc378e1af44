//! Common utilities for file upload handlers

use axum::extract::multipart::{Field, MultipartError};
use axum::extract::Multipart;
use axum::http::StatusCode;
use bytes::{Bytes, BytesMut};
use tubely_core::constants::DEFAULT_MEDIA_TYPE;
use tubely_core::AppError;

/// A file part read fully into memory.
#[derive(Debug)]
pub struct UploadedFile {
    pub data: Bytes,
    pub file_name: String,
    pub content_type: String,
}

/// Map a multipart read failure to a client error. Body-limit rejections are
/// reported the same way as an oversized part.
pub fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::BadRequest("File too large".to_string());
    }
    AppError::BadRequest(format!("Unable to parse form: {}", err.body_text()))
}

/// Validate file size
pub fn validate_file_size(file_size: usize, max_size: usize) -> Result<(), AppError> {
    if file_size > max_size {
        return Err(AppError::BadRequest("File too large".to_string()));
    }
    Ok(())
}

/// Read the first file part named `field_name`, rejecting it as soon as more
/// than `max_size` bytes have arrived. Other fields are skipped.
pub async fn read_file_field(
    mut multipart: Multipart,
    field_name: &str,
    max_size: usize,
) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(field_name) {
            continue;
        }

        let Some(file_name) = field.file_name().map(str::to_string) else {
            return Err(AppError::BadRequest("No file provided".to_string()));
        };
        let content_type = field
            .content_type()
            .filter(|ct| !ct.trim().is_empty())
            .unwrap_or(DEFAULT_MEDIA_TYPE)
            .to_string();

        let data = read_limited(field, max_size).await?;

        tracing::debug!(
            field = field_name,
            file_name = %file_name,
            content_type = %content_type,
            size = data.len(),
            "Read multipart file"
        );

        return Ok(UploadedFile {
            data,
            file_name,
            content_type,
        });
    }

    Err(AppError::BadRequest("No file provided".to_string()))
}

async fn read_limited(mut field: Field<'_>, max_size: usize) -> Result<Bytes, AppError> {
    let mut buf = BytesMut::new();
    while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
        validate_file_size(buf.len() + chunk.len(), max_size)?;
        buf.extend_from_slice(&chunk);
    }
    Ok(buf.freeze())
}
