use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading an input file.
///
/// Per-row problems are never errors at this level; they surface as
/// rejection diagnostics from the validator instead.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("input file not found: {0}")]
    NotFound(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
