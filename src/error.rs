// File: src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort loading a log.
///
/// Line numbers are 1-based and count the entries accepted before the
/// failing line, plus one.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Line {line} in log data has a timestamp that cannot be parsed.")]
    TimestampFormat { line: usize },

    #[error(
        "Line {line} in log data does not have three entries formatted as \
         [TIMESTAMP] EVENT_TYPE MESSAGE."
    )]
    FieldCount { line: usize },

    #[error("failed to read log file '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read log data")]
    Read(#[from] std::io::Error),
}

impl ParseError {
    /// The offending line, for the two malformed-line kinds.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::TimestampFormat { line } | ParseError::FieldCount { line } => Some(*line),
            ParseError::Io { .. } | ParseError::Read(_) => None,
        }
    }
}
