//! File operation failures

use thiserror::Error;

/// Why a file operation did not complete
///
/// The editor reacts to every variant the same way (one generic log line);
/// the variants exist for the developer console.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    /// The user dismissed the picker
    #[error("file picker was dismissed")]
    Cancelled,
    /// The host does not expose the needed primitive
    #[error("file system access unavailable: {0}")]
    Unsupported(String),
    /// Any other host failure (permission, write, missing file)
    #[error("I/O error: {0}")]
    Io(String),
    /// The file could not be decoded as text
    #[error("could not decode file as text: {0}")]
    Decode(String),
}

impl FsError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FsError::Cancelled)
    }
}
