//! Error type shared by every stage of the renderer.

use std::path::Path;

/// Errors that can occur while turning an image into text
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Unreadable file, unsupported format, or a zero-sized image
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// The glyph palette has no entries
    #[error("invalid palette: glyph palette must contain at least one character")]
    InvalidPalette,

    /// Render parameters out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The user dismissed the file picker without choosing anything
    #[error("no image file selected")]
    NoFileSelected,
}

impl RenderError {
    /// Wraps a decode/IO failure for `path` into [`RenderError::InvalidImage`]
    pub(crate) fn unreadable(path: &Path, err: impl std::fmt::Display) -> Self {
        RenderError::InvalidImage(format!("failed to read {}: {}", path.display(), err))
    }
}
