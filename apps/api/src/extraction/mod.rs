// Résumé text → CandidateRecord.
// File decoding stays in `ingest`; the extractor itself only ever sees text.
// Batch ingestion from HTTP must run inside tokio::task::spawn_blocking.

pub mod extractor;
pub mod handlers;
pub mod ingest;
pub mod profile;
