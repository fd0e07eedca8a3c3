use std::io;
use thiserror::Error;

/// Error type for varseg-io operations.
#[derive(Error, Debug)]
pub enum RecordIoError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input file could not be opened.
    #[error("Can't open record file: {0}")]
    Open(String),

    /// A line could not be decoded.
    #[error("Invalid record on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A segment could not be encoded.
    #[error("Failed to encode segment: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Result type alias for varseg-io operations.
pub type Result<T> = std::result::Result<T, RecordIoError>;
