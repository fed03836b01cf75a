//! Error types for docsync operations.
//!
//! This module defines [`DocSyncError`], the error type returned at command
//! boundaries, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Filesystem reads performed by the checker never produce errors; they
//!   degrade to empty or zero results and log a diagnostic instead
//! - Use `DocSyncError` for conditions that stop a command before it runs

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for docsync operations.
#[derive(Debug, Error)]
pub enum DocSyncError {
    /// The documentation directory argument could not be used.
    #[error("Invalid documentation directory {path}: {message}")]
    InvalidDocsDir { path: PathBuf, message: String },

    /// IO error wrapper (e.g., the working directory is unavailable).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for docsync operations.
pub type Result<T> = std::result::Result<T, DocSyncError>;
