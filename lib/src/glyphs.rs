//! Per-pixel glyph selection and text assembly

use crate::normalize::NormalizedImage;
use crate::palette::Palette;
use image::Rgb;
use rayon::prelude::*;

/// Resets all SGR attributes after a colored glyph
pub const ANSI_RESET: &str = "\x1b[0m";

/// Select the glyph for a scalar intensity
///
/// Pixels strictly brighter than `threshold` burn out and yield `None`
/// (rendered as a bare space); everything else is quantised onto the palette.
///
/// # Arguments
/// * `intensity` - Pixel intensity in `[0, 255]`
/// * `palette` - Glyph ramp, densest first
/// * `threshold` - Burn-out threshold
pub fn select_glyph(intensity: f32, palette: &Palette, threshold: u8) -> Option<char> {
    if intensity > f32::from(threshold) {
        None
    } else {
        Some(palette.glyph_for(intensity))
    }
}

/// Mean of the three channels, the intensity used in color mode
pub fn mean_intensity(pixel: &Rgb<u8>) -> f32 {
    (u16::from(pixel[0]) + u16::from(pixel[1]) + u16::from(pixel[2])) as f32 / 3.0
}

/// Append `glyph` wrapped in a 24-bit foreground color and a reset
///
/// Every glyph carries its own color, so rows can be cut or reordered
/// without leaking color state.
pub fn push_colored_glyph(out: &mut String, glyph: char, pixel: &Rgb<u8>) {
    out.push_str(&format!(
        "\x1b[38;2;{};{};{}m{}{}",
        pixel[0], pixel[1], pixel[2], glyph, ANSI_RESET
    ));
}

/// Render one row of the image to text
pub fn render_row(img: &NormalizedImage, y: u32, palette: &Palette, threshold: u8) -> String {
    let mut line = String::new();

    match img {
        NormalizedImage::Gray(gray) => {
            for x in 0..gray.width() {
                let value = gray.get_pixel(x, y)[0];
                line.push(select_glyph(f32::from(value), palette, threshold).unwrap_or(' '));
            }
        }
        NormalizedImage::Rgb(rgb) => {
            for x in 0..rgb.width() {
                let pixel = rgb.get_pixel(x, y);
                match select_glyph(mean_intensity(pixel), palette, threshold) {
                    Some(glyph) => push_colored_glyph(&mut line, glyph, pixel),
                    None => line.push(' '),
                }
            }
        }
    }

    line
}

/// Render every row and join them with newlines
///
/// Rows are mapped in parallel; output order always follows row index.
/// No trailing newline is appended.
pub fn render_text(img: &NormalizedImage, palette: &Palette, threshold: u8) -> String {
    let (_, height) = img.dimensions();

    let rows: Vec<String> = (0..height)
        .into_par_iter()
        .map(|y| render_row(img, y, palette, threshold))
        .collect();

    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, RgbImage};

    fn strip_ansi(line: &str) -> String {
        let mut out = String::new();
        let mut chars = line.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_two_by_two_grayscale_scenario() {
        let gray = GrayImage::from_raw(2, 2, vec![0, 128, 200, 255]).unwrap();
        let palette = Palette::new("#. ").unwrap();
        let text = render_text(&NormalizedImage::Gray(gray), &palette, 250);
        assert_eq!(text, "#.\n. ");
    }

    #[test]
    fn test_threshold_law_grayscale() {
        let palette = Palette::default();
        for threshold in [0u8, 100, 250, 254] {
            let above = f32::from(threshold) + 1.0;
            assert_eq!(select_glyph(above, &palette, threshold), None);
            assert_eq!(select_glyph(255.0, &palette, threshold), None);
            let at = select_glyph(f32::from(threshold), &palette, threshold);
            assert!(at.is_some());
        }
    }

    #[test]
    fn test_threshold_selects_index_not_space_for_dark_pixels() {
        // Ramp ends in a space; intensities at or below the threshold still
        // quantise through the palette
        let palette = Palette::default();
        assert_eq!(select_glyph(0.0, &palette, 250), Some('$'));
        assert_eq!(select_glyph(250.0, &palette, 255), Some(palette.glyph(65)));
        assert_eq!(select_glyph(255.0, &palette, 255), Some(' '));
    }

    #[test]
    fn test_mean_intensity() {
        assert_eq!(mean_intensity(&Rgb([0, 0, 0])), 0.0);
        assert_eq!(mean_intensity(&Rgb([255, 255, 255])), 255.0);
        assert_eq!(mean_intensity(&Rgb([30, 60, 90])), 60.0);
    }

    #[test]
    fn test_color_glyph_escape_format() {
        let mut out = String::new();
        push_colored_glyph(&mut out, '#', &Rgb([1, 22, 255]));
        assert_eq!(out, "\x1b[38;2;1;22;255m#\x1b[0m");
    }

    #[test]
    fn test_color_row_wraps_each_glyph_and_burns_out_bright() {
        let mut rgb = RgbImage::new(2, 1);
        rgb.put_pixel(0, 0, Rgb([10, 20, 30]));
        rgb.put_pixel(1, 0, Rgb([255, 255, 255]));
        let palette = Palette::new("#. ").unwrap();
        let line = render_row(&NormalizedImage::Rgb(rgb), 0, &palette, 250);
        assert_eq!(line, "\x1b[38;2;10;20;30m#\x1b[0m ");
    }

    #[test]
    fn test_color_burn_out_uses_channel_mean() {
        // Mean 250 is not strictly above the threshold
        let rgb = RgbImage::from_pixel(1, 1, Rgb([255, 255, 240]));
        let palette = Palette::new("#. ").unwrap();
        let line = render_row(&NormalizedImage::Rgb(rgb), 0, &palette, 250);
        assert_eq!(strip_ansi(&line), ".");
        assert!(line.starts_with("\x1b[38;2;255;255;240m"));
    }

    #[test]
    fn test_rows_have_equal_visible_width() {
        let mut rgb = RgbImage::new(5, 4);
        for (x, y, pixel) in rgb.enumerate_pixels_mut() {
            let v = ((x * 60 + y * 20) % 256) as u8;
            *pixel = Rgb([v, 255 - v, v / 2]);
        }
        let text = render_text(&NormalizedImage::Rgb(rgb), &Palette::default(), 200);
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), 4);
        for line in lines {
            assert_eq!(strip_ansi(line).chars().count(), 5);
        }
    }

    #[test]
    fn test_render_text_row_order_is_top_to_bottom() {
        let mut gray = GrayImage::new(1, 3);
        gray.put_pixel(0, 0, Luma([0]));
        gray.put_pixel(0, 1, Luma([128]));
        gray.put_pixel(0, 2, Luma([255]));
        let palette = Palette::new("#. ").unwrap();
        assert_eq!(render_text(&NormalizedImage::Gray(gray), &palette, 254), "#\n.\n ");
    }

    #[test]
    fn test_render_text_empty_image() {
        let gray = GrayImage::new(0, 0);
        assert_eq!(render_text(&NormalizedImage::Gray(gray), &Palette::default(), 250), "");
    }
}
