use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::extractor::Extractor;
use crate::extraction::ingest::{ingest_uploads, IngestOutcome, UploadedDocument};
use crate::models::candidate::CandidateRecord;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub text: String,
}

/// POST /api/v1/candidates/extract
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(req): Json<ExtractRequest>,
) -> Result<Json<CandidateRecord>, AppError> {
    let id = req.id.unwrap_or_else(|| Uuid::new_v4().to_string());
    Ok(Json(state.extractor.build_candidate(&req.text, &id)))
}

/// POST /api/v1/candidates/upload
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<IngestOutcome>, AppError> {
    let mut uploads = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let file_name = field
            .file_name()
            .or(field.name())
            .unwrap_or("upload")
            .to_string();
        let contents = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read '{file_name}': {e}")))?;

        uploads.push(UploadedDocument {
            file_name,
            contents,
        });
    }

    if uploads.is_empty() {
        return Err(AppError::Validation("No files uploaded".to_string()));
    }

    let outcome = ingest_off_runtime(Arc::clone(&state.extractor), uploads).await?;
    Ok(Json(outcome))
}

/// PDF decoding is CPU-bound; it runs on the blocking pool, never on the executor.
async fn ingest_off_runtime(
    extractor: Arc<Extractor>,
    uploads: Vec<UploadedDocument>,
) -> Result<IngestOutcome, AppError> {
    tokio::task::spawn_blocking(move || ingest_uploads(&extractor, &uploads))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in upload ingestion: {e}"))
        })
}
