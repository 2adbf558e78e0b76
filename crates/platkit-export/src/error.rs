//! Error types for pattern export.

use thiserror::Error;

/// Errors that can occur while laying out or writing a drawing.
#[derive(Error, Debug)]
pub enum ExportError {
    /// IO error while writing the output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The drawing has no shapes.
    #[error("drawing is empty")]
    EmptyDrawing,

    /// Output path has no recognised extension.
    #[error("unknown export format: {0:?} (expected .dxf or .svg)")]
    UnknownFormat(String),
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
