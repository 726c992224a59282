//! Error types for file cleaning

use std::path::PathBuf;

use thiserror::Error;

/// Result type for file cleaning operations
pub type Result<T> = std::result::Result<T, CleanError>;

/// Errors that can occur while cleaning a file
///
/// The filter itself never fails; these only come from reading and writing.
#[derive(Error, Debug)]
pub enum CleanError {
    /// Input path does not exist
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Input is not valid UTF-8 text
    #[error("File is not valid UTF-8: {}", path.display())]
    InvalidUtf8 { path: PathBuf },

    /// Read or write failure
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CleanError {
    /// Returns `true` for the missing-input case
    pub fn is_not_found(&self) -> bool {
        matches!(self, CleanError::NotFound(_))
    }
}
