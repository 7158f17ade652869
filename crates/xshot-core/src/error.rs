//! Error types for XShot

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OverlayError>;

/// Main error type for the overlay
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("Invalid image: {width}x{height} with {len} bytes")]
    InvalidImage { width: u32, height: u32, len: usize },

    #[error("Font loading failed: {0}")]
    FontLoad(#[from] FontLoadError),

    #[error("Invalid color: {0}")]
    Color(String),
}

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid font data")]
    InvalidData,

    #[error("Face {index} not present in collection {path}")]
    UnsupportedCollection { path: String, index: u32 },
}
