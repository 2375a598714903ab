//! Output size calculation with character-cell aspect correction

use crate::error::RenderError;

/// Calculates the text grid size for an image
///
/// ```text
/// height = min(max_height, round(H * max_width / W * aspect))
/// width  = max(max_width,  round(W * max_height / H / aspect))
/// ```
///
/// Height is capped and width is floored. Width therefore never drops below
/// `max_width`, even when a narrower grid would track the source aspect more
/// closely; this quirk is kept so output sizes stay stable across versions.
/// Both results are clamped to at least 1.
///
/// Scaled sizes round to nearest rather than truncating: a 400x50 source at
/// the default limits gets 18 rows, where truncation would give 17.
///
/// # Arguments
/// * `width` - Source width in pixels
/// * `height` - Source height in pixels
/// * `max_width` - Requested width in characters
/// * `max_height` - Requested height in characters
/// * `char_aspect` - Character cell height / width
///
/// # Returns
/// `(columns, rows)` of the rendered text
///
/// # Errors
/// [`RenderError::InvalidImage`] when the source has a zero dimension
pub fn compute_dimensions(
    width: u32,
    height: u32,
    max_width: u32,
    max_height: u32,
    char_aspect: f32,
) -> Result<(u32, u32), RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidImage(format!(
            "image has zero dimension ({}x{})",
            width, height
        )));
    }

    let (w, h) = (f64::from(width), f64::from(height));
    let aspect = f64::from(char_aspect);

    let scaled_height = (h * f64::from(max_width) / w * aspect).round();
    let scaled_width = (w * f64::from(max_height) / h / aspect).round();

    let rows = (scaled_height.min(f64::from(max_height)) as u32).max(1);
    let columns = (scaled_width.max(f64::from(max_width)) as u32).max(1);

    Ok((columns, rows))
}
