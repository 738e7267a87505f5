#![allow(dead_code)]

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::extraction::extractor::Extractor;
use crate::models::candidate::CandidateRecord;

/// Document formats the ingestion layer can turn into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Pdf,
}

impl DocumentKind {
    /// Dispatches on the file extension, case-insensitively.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())?
            .to_lowercase();

        match extension.as_str() {
            "txt" | "md" => Some(DocumentKind::PlainText),
            "pdf" => Some(DocumentKind::Pdf),
            _ => None,
        }
    }
}

/// A file received over HTTP, not yet decoded.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: String,
    pub contents: Bytes,
}

/// A file that produced no candidate, with the reason.
#[derive(Debug, Clone, Serialize)]
pub struct RejectedDocument {
    pub file_name: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct IngestOutcome {
    pub candidates: Vec<CandidateRecord>,
    pub rejected: Vec<RejectedDocument>,
}

/// Reads a document from disk. Unsupported formats, missing files and corrupt
/// documents all yield `None`; the failure is logged, never raised.
pub fn read_document(path: &Path) -> Option<String> {
    let file_name = path.to_string_lossy();
    let Some(kind) = DocumentKind::from_file_name(&file_name) else {
        warn!("Unsupported document format: {file_name}");
        return None;
    };

    match std::fs::read(path) {
        Ok(contents) => decode(&file_name, kind, &contents),
        Err(e) => {
            warn!("Failed to read {file_name}: {e}");
            None
        }
    }
}

/// Same contract as [`read_document`], for bytes already in memory.
pub fn read_upload(upload: &UploadedDocument) -> Option<String> {
    let Some(kind) = DocumentKind::from_file_name(&upload.file_name) else {
        warn!("Unsupported document format: {}", upload.file_name);
        return None;
    };
    decode(&upload.file_name, kind, &upload.contents)
}

fn decode(file_name: &str, kind: DocumentKind, contents: &[u8]) -> Option<String> {
    match kind {
        DocumentKind::PlainText => match String::from_utf8(contents.to_vec()) {
            Ok(text) => Some(text),
            Err(e) => {
                warn!("{file_name} is not valid UTF-8: {e}");
                None
            }
        },
        DocumentKind::Pdf => {
            // pdf-extract panics on some malformed documents.
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                pdf_extract::extract_text_from_mem(contents)
            }));
            match result {
                Ok(Ok(text)) => Some(text),
                Ok(Err(e)) => {
                    warn!("Failed to extract text from {file_name}: {e}");
                    None
                }
                Err(_) => {
                    warn!("PDF extraction aborted on {file_name}");
                    None
                }
            }
        }
    }
}

/// Turns a batch of uploads into candidates. A file that cannot be read is
/// reported in `rejected` and the rest of the batch carries on.
pub fn ingest_uploads(extractor: &Extractor, uploads: &[UploadedDocument]) -> IngestOutcome {
    let mut candidates = Vec::new();
    let mut rejected = Vec::new();

    for upload in uploads {
        match read_upload(upload) {
            Some(text) if !text.trim().is_empty() => {
                let id = Uuid::new_v4().to_string();
                candidates.push(extractor.build_candidate(&text, &id));
            }
            Some(_) => rejected.push(RejectedDocument {
                file_name: upload.file_name.clone(),
                reason: "document contains no text".to_string(),
            }),
            None => rejected.push(RejectedDocument {
                file_name: upload.file_name.clone(),
                reason: "document could not be read".to_string(),
            }),
        }
    }

    info!(
        "Ingested {} candidate(s), rejected {} document(s)",
        candidates.len(),
        rejected.len()
    );

    IngestOutcome {
        candidates,
        rejected,
    }
}
