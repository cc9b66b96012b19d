use thiserror::Error;

/// Errors surfaced by the paint engine.
///
/// Drawing itself never fails: stray coordinates are clipped and an
/// uninitialized canvas ignores input. Errors only come out of parsing
/// user-supplied values and writing images.
#[derive(Debug, Error)]
pub enum PaintError {
    #[error("Invalid hex color `{0}`, expected #RRGGBB")]
    InvalidHexColor(String),

    #[error("Canvas has not been initialized")]
    NotInitialized,

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for fallible paint operations
pub type PaintResult<T> = Result<T, PaintError>;
