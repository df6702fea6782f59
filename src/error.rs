//! Error types for ListBatch
//!
//! Provides a unified error type for all operations.
//!
//! Submission failures raised by a caller's own `Submitter` are never wrapped
//! in this type: `BatchAccumulator::run` hands them back unmodified.

use thiserror::Error;

/// Result type alias using BatchError
pub type Result<T> = std::result::Result<T, BatchError>;

/// Unified error type for ListBatch operations
#[derive(Debug, Error)]
pub enum BatchError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid operation on line {line}: {message}")]
    Input { line: usize, message: String },

    // -------------------------------------------------------------------------
    // Submission Errors
    // -------------------------------------------------------------------------
    #[error("Submission failed: {0}")]
    Submission(String),
}
