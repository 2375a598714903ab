use crate::error::RenderError;

/// Configuration for image-to-text conversion
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Output size limits, in character cells
    pub max_width: u32,          // default 70
    pub max_height: u32,         // default 39

    /// Emit 24-bit ANSI color escapes around every glyph
    pub color: bool,             // default false

    /// Pixels brighter than this render as blank space
    pub brightness_threshold: u8, // 0-255, default 250

    /// Height/width ratio of a terminal character cell
    pub char_aspect: f32,        // default 2.0
}

/// Terminal character cells are roughly twice as tall as they are wide
pub const DEFAULT_CHAR_ASPECT: f32 = 2.0;

/// Upper bound for `max_width` and `max_height`, in character cells
pub const MAX_TEXT_CELLS: u32 = 10_000;

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            // Size
            max_width: 70,
            max_height: 39,

            // Mode
            color: false,

            // Burn-out
            brightness_threshold: 250,

            // Cell geometry
            char_aspect: DEFAULT_CHAR_ASPECT,
        }
    }
}

impl RenderConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.max_width == 0 {
            return Err(RenderError::InvalidConfig(
                "max_width must be at least 1".to_string(),
            ));
        }
        if self.max_height == 0 {
            return Err(RenderError::InvalidConfig(
                "max_height must be at least 1".to_string(),
            ));
        }
        if self.max_width > MAX_TEXT_CELLS {
            return Err(RenderError::InvalidConfig(format!(
                "max_width must be at most {}, got {}",
                MAX_TEXT_CELLS, self.max_width
            )));
        }
        if self.max_height > MAX_TEXT_CELLS {
            return Err(RenderError::InvalidConfig(format!(
                "max_height must be at most {}, got {}",
                MAX_TEXT_CELLS, self.max_height
            )));
        }
        if !self.char_aspect.is_finite() || self.char_aspect <= 0.0 {
            return Err(RenderError::InvalidConfig(format!(
                "char_aspect must be a positive number, got {}",
                self.char_aspect
            )));
        }
        Ok(())
    }
}
