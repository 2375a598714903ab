//! Glyph palette and luminance quantisation
//!
//! The ramp runs from the most ink-heavy glyph to the lightest one, so a dark
//! pixel lands near index 0 and a bright pixel near the end.

use crate::error::RenderError;

/// Fixed glyph ramp, densest first, ending in a space
///
/// 68 levels, ordered by perceived luminance
pub const GLYPH_RAMP: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,^'. ";

/// An ordered, non-empty sequence of glyphs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    glyphs: Vec<char>,
}

impl Palette {
    /// Builds a palette from a string, one glyph per `char`
    ///
    /// # Errors
    /// Returns [`RenderError::InvalidPalette`] if `glyphs` is empty
    pub fn new(glyphs: &str) -> Result<Self, RenderError> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.is_empty() {
            return Err(RenderError::InvalidPalette);
        }
        Ok(Self { glyphs })
    }

    /// Number of glyphs in the ramp
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false; an empty palette cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph at `index`, 0 being the densest
    ///
    /// # Panics
    /// Panics if `index >= self.len()`
    pub fn glyph(&self, index: usize) -> char {
        self.glyphs[index]
    }

    /// Glyph for a scalar intensity in `[0, 255]`
    pub fn glyph_for(&self, intensity: f32) -> char {
        self.glyphs[glyph_index(intensity, self.glyphs.len())]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            glyphs: GLYPH_RAMP.chars().collect(),
        }
    }
}

/// Quantises an intensity into a ramp index
///
/// `index = floor(intensity * (len - 1) / 255)`, clamped to `[0, len - 1]`.
/// `len` must be non-zero.
pub fn glyph_index(intensity: f32, len: usize) -> usize {
    debug_assert!(len > 0, "palette length must be non-zero");
    let last = len.saturating_sub(1);
    let scaled = (intensity.clamp(0.0, 255.0) * last as f32 / 255.0).floor();
    (scaled as usize).min(last)
}
