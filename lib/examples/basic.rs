/// Basic example: Render a synthetic test image as text
///
/// This draws a few shapes into an RGBA buffer and prints both the grayscale
/// and the colored rendering to stdout
use ascii_textr::{RenderConfig, render_image};
use image::{DynamicImage, Rgba, RgbaImage};

fn main() {
    println!("ASCII Text Renderer - Basic Example");
    println!("===================================\n");

    let width = 160;
    let height = 120;
    let mut img = RgbaImage::new(width, height);

    // Transparent background, flattened to white when rendered
    for pixel in img.pixels_mut() {
        *pixel = Rgba([0, 0, 0, 0]);
    }

    // Filled circle with a horizontal color gradient
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 45.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist < radius {
                let t = (x as f32 / width as f32 * 255.0) as u8;
                img.put_pixel(x, y, Rgba([t, 60, 255 - t, 255]));
            } else if (dist - radius).abs() < 3.0 {
                // Dark outline
                img.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }
    }

    let input = DynamicImage::ImageRgba8(img);
    println!("Created test image: {}x{}\n", width, height);

    for color in [false, true] {
        let config = RenderConfig {
            color,
            ..Default::default()
        };

        match render_image(&input, &config) {
            Ok(text) => {
                println!("color = {}:", color);
                println!("{}\n", text);
            }
            Err(e) => {
                eprintln!("render failed: {}", e);
                std::process::exit(1);
            }
        }
    }
}
