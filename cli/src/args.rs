//! Command-line arguments

use ascii_textr::RenderConfig;
use clap::Parser;
use std::path::PathBuf;

/// Convert an image to ASCII art
#[derive(Parser, Debug)]
#[command(name = "ascii-textr")]
#[command(version, about = "Convert an image to ASCII art", long_about = None)]
pub struct Args {
    /// Path to the image file (opens a file picker when omitted)
    #[arg(short, long = "image_path", visible_alias = "image-path")]
    pub image_path: Option<PathBuf>,

    /// Output colored ASCII art
    #[arg(short, long)]
    pub color: bool,

    /// Maximum output width in characters
    #[arg(long, default_value_t = 70, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_width: u32,

    /// Maximum output height in characters
    #[arg(long, default_value_t = 39, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_height: u32,

    /// Pixels brighter than this (0-255) are left blank
    #[arg(long, default_value_t = 250)]
    pub threshold: u8,
}

impl Args {
    /// Render parameters selected by these arguments
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            max_width: self.max_width,
            max_height: self.max_height,
            color: self.color,
            brightness_threshold: self.threshold,
            ..Default::default()
        }
    }
}
