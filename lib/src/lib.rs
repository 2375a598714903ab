//! ASCII Text Renderer - turns raster images into terminal text
//!
//! Each pixel of a resized image becomes one glyph from a fixed luminance
//! ramp. Near-white pixels burn out to spaces, and color mode wraps every
//! glyph in its own 24-bit ANSI foreground escape.
//!
//! # Example
//! ```no_run
//! use ascii_textr::{render_image, RenderConfig};
//!
//! let input = image::open("photo.jpg").unwrap();
//! let config = RenderConfig { color: true, ..Default::default() };
//! let text = render_image(&input, &config).unwrap();
//! println!("{}", text);
//! ```

pub mod config;
pub mod dimensions;
pub mod error;
pub mod glyphs;
pub mod input;
pub mod normalize;
pub mod palette;
pub mod renderer;
pub mod resample;

// Re-export main types for convenience
pub use config::RenderConfig;
pub use error::RenderError;
pub use input::{PathProvider, load_image, render_file, resolve_image_path};
pub use palette::{GLYPH_RAMP, Palette};
pub use renderer::{render_image, render_image_with_palette};
