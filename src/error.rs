use std::io;
use std::path::PathBuf;

/// Fatal errors for a clippings run.
///
/// Malformed records and unparseable page numbers are not errors; the parser
/// skips or tolerates them and reports counts through `ParseStats`.
#[derive(Debug, thiserror::Error)]
pub enum ClippingsError {
    #[error("Invalid input file {}: {source}", .path.display())]
    InputNotReadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize highlights: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Write task did not complete: {0}")]
    TaskFailed(String),
}

impl ClippingsError {
    pub(crate) fn write_failure(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OutputWriteFailure {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClippingsError>;
