//! Error types for the calendar renderer

use thiserror::Error;

/// Result type alias for renderer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the calendar renderer
#[derive(Error, Debug)]
pub enum Error {
    /// Font discovery or loading failed
    #[error("Font error: {0}")]
    Font(String),

    /// Writing the rendered page to disk failed
    #[error("Failed to export calendar page: {0}")]
    Export(#[from] std::io::Error),

    /// Encoding the page as PNG failed
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    /// Creating the preview window or presenting a frame failed
    #[error("Window error: {0}")]
    Window(String),
}
