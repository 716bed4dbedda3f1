//! File reading and writing with classified error kinds.
//!
//! Read and write failures come back as enums rather than bare I/O errors so
//! the session loop can pattern-match on the kind and print the right
//! user-facing message.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

/// Why reading the input file failed.
#[derive(Debug, Error)]
pub enum ReadError {
    /// No file exists at the given path.
    #[error("file not found")]
    NotFound,

    /// The file exists but the process may not read it.
    #[error("permission denied")]
    PermissionDenied,

    /// The file contents are not valid UTF-8 text.
    ///
    /// Usually means a binary file, or text in an encoding this tool does
    /// not handle.
    #[error("not valid UTF-8 text")]
    InvalidUtf8,

    /// The path names a directory, not a file.
    #[error("path is a directory")]
    IsADirectory,

    /// Any other I/O failure.
    #[error(transparent)]
    Io(io::Error),
}

/// Why writing the output file failed.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The process may not write to the given path.
    #[error("permission denied")]
    PermissionDenied,

    /// Any other I/O failure.
    #[error(transparent)]
    Io(io::Error),
}

/// Read the entire file at `path` as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String, ReadError> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ReadError::NotFound,
        io::ErrorKind::PermissionDenied => ReadError::PermissionDenied,
        io::ErrorKind::InvalidData => ReadError::InvalidUtf8,
        io::ErrorKind::IsADirectory => ReadError::IsADirectory,
        _ => ReadError::Io(err),
    })
}

/// Write `text` to `path` as UTF-8, creating or truncating the file.
pub fn write_text(path: &Path, text: &str) -> Result<(), WriteError> {
    fs::write(path, text).map_err(|err| match err.kind() {
        io::ErrorKind::PermissionDenied => WriteError::PermissionDenied,
        _ => WriteError::Io(err),
    })
}
