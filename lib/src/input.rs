//! Locating and decoding the source image
//!
//! The renderer never talks to a GUI toolkit. When no path is given on the
//! command line, a [`PathProvider`] is asked for one; the binary plugs a native
//! file dialog in here, tests plug in fakes.

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::renderer::render_image;
use image::DynamicImage;
use std::path::{Path, PathBuf};

/// Supplies an image path when none was given explicitly
pub trait PathProvider {
    /// Returns the chosen path, or `None` if the user cancelled
    fn pick_image(&self) -> Option<PathBuf>;
}

/// Picks the image to render
///
/// An explicit path wins; otherwise `provider` is consulted.
///
/// # Errors
/// [`RenderError::NoFileSelected`] if the provider comes back empty
pub fn resolve_image_path(
    explicit: Option<PathBuf>,
    provider: &dyn PathProvider,
) -> Result<PathBuf, RenderError> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    match provider.pick_image() {
        Some(path) if !path.as_os_str().is_empty() => Ok(path),
        _ => Err(RenderError::NoFileSelected),
    }
}

/// Decode an image from disk (PNG, JPEG and the other formats `image` enables)
pub fn load_image(path: &Path) -> Result<DynamicImage, RenderError> {
    let img = image::open(path).map_err(|e| RenderError::unreadable(path, e))?;
    log::debug!(
        "loaded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img)
}

/// Load `path` and render it in one step
pub fn render_file(path: &Path, config: &RenderConfig) -> Result<String, RenderError> {
    let img = load_image(path)?;
    render_image(&img, config)
}
