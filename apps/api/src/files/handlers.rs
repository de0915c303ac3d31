use std::path::Path;

use axum::{
    extract::{Path as UrlPath, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::warn;

use crate::errors::AppError;
use crate::files::{allows_copy, language_for, resolve, Document, RESUME, TRANSCRIPT};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FilePreviewResponse {
    pub filename: String,
    pub language: &'static str,
    pub content: String,
    pub allow_copy: bool,
}

async fn read_file(path: &Path, filename: &str) -> Result<Vec<u8>, AppError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(file = %filename, "Requested file does not exist");
            Err(AppError::NotFound(format!("File '{filename}' not found")))
        }
        Err(e) => Err(AppError::Internal(
            anyhow::Error::new(e).context(format!("reading {}", path.display())),
        )),
    }
}

/// GET /downloads/:filename
pub async fn handle_preview(
    State(state): State<AppState>,
    UrlPath(filename): UrlPath<String>,
) -> Result<Json<FilePreviewResponse>, AppError> {
    let path = resolve(&state.config.downloads_dir, &filename).ok_or_else(|| {
        warn!(file = %filename, "Rejected download path");
        AppError::NotFound(format!("File '{filename}' not found"))
    })?;

    let bytes = read_file(&path, &filename).await?;
    let content = String::from_utf8(bytes).map_err(|_| {
        AppError::UnprocessableEntity(format!("File '{filename}' is not valid UTF-8 text"))
    })?;

    Ok(Json(FilePreviewResponse {
        language: language_for(&filename),
        allow_copy: allows_copy(&filename),
        filename,
        content,
    }))
}

async fn download(state: &AppState, document: Document) -> Result<impl IntoResponse, AppError> {
    let path = state.config.downloads_dir.join(document.file_name);
    let bytes = read_file(&path, document.file_name).await?;
    let disposition = format!("attachment; filename=\"{}\"", document.download_name);

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}

/// GET /download/transcript
pub async fn handle_download_transcript(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    download(&state, TRANSCRIPT).await
}

/// GET /download/resume
pub async fn handle_download_resume(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    download(&state, RESUME).await
}

