use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum RepodocError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("write error: {0}")]
    Write(#[from] std::io::Error),
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] globset::Error),
    #[error("{path} is not a readable directory: {source}")]
    InvalidRoot {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("document output requested but this build lacks the `document` feature")]
    DocumentSupport,
    #[error("document serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
impl RepodocError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RepodocError::Io {
            path: path.into(),
            source,
        }
    }
}
