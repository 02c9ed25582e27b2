//! Playback error taxonomy.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by a media backend while opening or driving a source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a valid local file path: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("Could not open {}: {reason}", path.display())]
    Open { path: PathBuf, reason: String },

    #[error("Seek failed: {reason}")]
    Seek { reason: String },

    /// Runtime failure reported by the framework (decode error, missing codec).
    #[error("{0}")]
    Stream(String),
}
