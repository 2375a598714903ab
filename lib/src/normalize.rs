//! Color-mode normalisation
//!
//! Brings any decoded image into one of the two shapes the glyph mapper
//! understands: a single luminance channel, or opaque RGB.

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage, RgbaImage};

/// An alpha-free image in the channel layout the mapper works on
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedImage {
    /// One luminance channel per pixel (grayscale mode)
    Gray(GrayImage),
    /// Three color channels per pixel (color mode)
    Rgb(RgbImage),
}

impl NormalizedImage {
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            NormalizedImage::Gray(img) => img.dimensions(),
            NormalizedImage::Rgb(img) => img.dimensions(),
        }
    }

    pub fn is_color(&self) -> bool {
        matches!(self, NormalizedImage::Rgb(_))
    }
}

/// Normalises a decoded image for the requested mode
///
/// Transparent images are first composited onto white. Grayscale mode then
/// reduces the result to luminance; color mode keeps three channels.
pub fn normalize(img: &DynamicImage, color: bool) -> NormalizedImage {
    let rgb = if img.color().has_alpha() {
        log::debug!("flattening alpha channel onto white");
        flatten_alpha(&img.to_rgba8())
    } else {
        img.to_rgb8()
    };

    if color {
        NormalizedImage::Rgb(rgb)
    } else {
        NormalizedImage::Gray(calculate_luminance(&rgb))
    }
}

/// Composite an RGBA image onto an opaque white background
///
/// `out = (c * a + 255 * (255 - a)) / 255`, rounded. Alpha 0 gives pure white,
/// alpha 255 leaves the color untouched.
pub fn flatten_alpha(img: &RgbaImage) -> RgbImage {
    let (width, height) = img.dimensions();
    let mut output = RgbImage::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels() {
        let alpha = u32::from(pixel[3]);
        let blend = |c: u8| -> u8 {
            let mixed = u32::from(c) * alpha + 255 * (255 - alpha);
            ((mixed + 127) / 255) as u8
        };
        output.put_pixel(x, y, Rgb([blend(pixel[0]), blend(pixel[1]), blend(pixel[2])]));
    }

    output
}

/// Luminance of a single RGB pixel
///
/// ITU-R BT.601 weights in integer form: `(299 R + 587 G + 114 B) / 1000`,
/// rounded to nearest. Gray inputs (`R == G == B`) map to themselves.
pub fn luma_bt601(pixel: &Rgb<u8>) -> u8 {
    let weighted =
        299 * u32::from(pixel[0]) + 587 * u32::from(pixel[1]) + 114 * u32::from(pixel[2]);
    ((weighted + 500) / 1000) as u8
}

/// Calculate luminance for every pixel of an RGB image
pub fn calculate_luminance(img: &RgbImage) -> GrayImage {
    let (width, height) = img.dimensions();
    let mut output = GrayImage::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels() {
        output.put_pixel(x, y, Luma([luma_bt601(pixel)]));
    }

    output
}
