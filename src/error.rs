//! Error types for the linkpage library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for linkpage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a link list.
#[derive(Error, Debug)]
pub enum Error {
    /// The input path does not resolve to an existing file.
    ///
    /// Raised before any read is attempted.
    #[error("input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The input file exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The output file could not be written (missing directory,
    /// permissions).
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}
