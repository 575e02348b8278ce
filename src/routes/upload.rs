use axum::{Json, extract::Multipart};

use crate::error::AppError;
use crate::message::UploadResponse;

/// Upload stub: echoes the file's metadata back and stores nothing.
pub async fn upload_handler(mut multipart: Multipart) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        return Ok(Json(UploadResponse {
            name,
            size: bytes.len() as u64,
            content_type,
        }));
    }

    Err(AppError::BadRequest("No file uploaded".to_string()))
}
