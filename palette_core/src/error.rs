//! Error types for palette validation and header emission.

use thiserror::Error;

/// Everything that can go wrong between palette data and header text.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("palette set contains no palettes")]
    EmptyPaletteSet,

    #[error("palette '{palette}' has no colors")]
    EmptyPalette { palette: String },

    #[error("palette '{palette}' defines color '{color}' more than once")]
    DuplicateColor { palette: String, color: String },

    #[error("generated identifier '{identifier}' would be defined more than once")]
    DuplicateIdentifier { identifier: String },

    #[error("palette '{palette}' colors {found:?} do not match {expected:?}")]
    MismatchedColors {
        palette: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("palette json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("write header: {0}")]
    Io(#[from] std::io::Error),
}

impl PaletteError {
    /// True for errors caused by the palette data itself rather than by
    /// decoding or writing.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, PaletteError::Json(_) | PaletteError::Io(_))
    }
}
