use crate::config::RenderConfig;
use crate::dimensions::compute_dimensions;
use crate::error::RenderError;
use crate::glyphs::render_text;
use crate::normalize::normalize;
use crate::palette::Palette;
use crate::resample::resample;
use image::DynamicImage;

/// Converts an image to text using the built-in glyph ramp
///
/// This runs the full pipeline:
/// 1. Compute the text grid size with character-cell aspect correction
/// 2. Flatten transparency onto white, or reduce to luminance in grayscale mode
/// 3. Resample to the grid size with Lanczos3
/// 4. Map each pixel to a glyph (wrapped in ANSI color in color mode)
/// 5. Join rows top to bottom with `\n`
///
/// # Arguments
/// * `img` - The decoded source image
/// * `config` - Render parameters
///
/// # Returns
/// The rendered text, one line per output row, without a trailing newline
///
/// # Errors
/// [`RenderError::InvalidConfig`] for bad parameters,
/// [`RenderError::InvalidImage`] for a zero-sized image
pub fn render_image(img: &DynamicImage, config: &RenderConfig) -> Result<String, RenderError> {
    render_image_with_palette(img, config, &Palette::default())
}

/// Same as [`render_image`], with a caller-supplied glyph ramp
///
/// An empty ramp is rejected earlier, when the [`Palette`] is built.
pub fn render_image_with_palette(
    img: &DynamicImage,
    config: &RenderConfig,
    palette: &Palette,
) -> Result<String, RenderError> {
    config.validate()?;

    let (columns, rows) = compute_dimensions(
        img.width(),
        img.height(),
        config.max_width,
        config.max_height,
        config.char_aspect,
    )?;
    log::debug!(
        "rendering {}x{} image as {}x{} text ({} mode)",
        img.width(),
        img.height(),
        columns,
        rows,
        if config.color { "color" } else { "grayscale" }
    );

    let normalized = normalize(img, config.color);
    let resized = resample(&normalized, columns, rows);

    Ok(render_text(&resized, palette, config.brightness_threshold))
}
