use crate::normalize::NormalizedImage;
use image::{ImageBuffer, Pixel, imageops};

/// Resize a normalised image to exactly `width` x `height`
///
/// Uses Lanczos3 in both directions, so downscaling averages neighbourhoods
/// instead of dropping pixels. Matching dimensions return an untouched copy.
///
/// # Arguments
/// * `img` - The grayscale or RGB image to resize
/// * `width` - Target width (text columns)
/// * `height` - Target height (text rows)
pub fn resample(img: &NormalizedImage, width: u32, height: u32) -> NormalizedImage {
    match img {
        NormalizedImage::Gray(gray) => NormalizedImage::Gray(resize_buffer(gray, width, height)),
        NormalizedImage::Rgb(rgb) => NormalizedImage::Rgb(resize_buffer(rgb, width, height)),
    }
}

fn resize_buffer<P>(
    input: &ImageBuffer<P, Vec<u8>>,
    width: u32,
    height: u32,
) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8> + 'static,
{
    if input.dimensions() == (width, height) {
        return input.clone();
    }

    log::debug!(
        "resampling {}x{} -> {}x{} (Lanczos3)",
        input.width(),
        input.height(),
        width,
        height
    );
    imageops::resize(input, width, height, imageops::FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    #[test]
    fn test_resample_identity_keeps_pixels() {
        let gray = GrayImage::from_raw(2, 2, vec![0, 128, 200, 255]).unwrap();
        let img = NormalizedImage::Gray(gray.clone());
        assert_eq!(resample(&img, 2, 2), NormalizedImage::Gray(gray));
    }

    #[test]
    fn test_resample_downscale_dimensions() {
        let img = NormalizedImage::Rgb(RgbImage::from_pixel(100, 50, Rgb([1, 2, 3])));
        let resized = resample(&img, 70, 39);
        assert_eq!(resized.dimensions(), (70, 39));
        assert!(resized.is_color());
    }

    #[test]
    fn test_resample_upscale_dimensions() {
        let img = NormalizedImage::Gray(GrayImage::from_pixel(3, 3, Luma([90])));
        let resized = resample(&img, 70, 39);
        assert_eq!(resized.dimensions(), (70, 39));
    }

    #[test]
    fn test_resample_uniform_image_stays_uniform() {
        let img = NormalizedImage::Gray(GrayImage::from_pixel(40, 40, Luma([120])));
        match resample(&img, 13, 7) {
            NormalizedImage::Gray(out) => assert!(out.pixels().all(|p| p[0].abs_diff(120) <= 1)),
            other => panic!("expected grayscale, got {:?}", other),
        }
    }

    #[test]
    fn test_resample_smooths_instead_of_sampling() {
        // Alternating black/white columns average to mid-gray when halved
        let mut gray = GrayImage::new(64, 8);
        for (x, _, pixel) in gray.enumerate_pixels_mut() {
            *pixel = Luma([if x % 2 == 0 { 0 } else { 255 }]);
        }
        match resample(&NormalizedImage::Gray(gray), 32, 4) {
            NormalizedImage::Gray(out) => {
                let center = out.get_pixel(16, 2)[0];
                assert!((64..=192).contains(&center), "got {}", center);
            }
            other => panic!("expected grayscale, got {:?}", other),
        }
    }
}
