//! Error types with caller location tracking.

use derive_more::{Display, Error};
use tracing::instrument;

/// Coordinates that do not name a board cell.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cell error: {} at {}:{}", message, file, line)]
pub struct CellError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CellError {
    /// Creates a new cell error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// The runtime inbox is gone, so actions can no longer be delivered.
#[derive(Debug, Clone, Display, Error)]
#[display("Runtime error: {} at {}:{}", message, file, line)]
pub struct RuntimeError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RuntimeError {
    /// Creates a new runtime error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
