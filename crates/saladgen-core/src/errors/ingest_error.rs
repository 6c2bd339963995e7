use std::path::PathBuf;

use crate::model::kind::UnknownKind;

/// FlavorDB ingestion errors.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read ingredient data: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed FlavorDB record at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A data subdirectory whose name is not a known ingredient kind.
    #[error(transparent)]
    UnknownKind(#[from] UnknownKind),
}
