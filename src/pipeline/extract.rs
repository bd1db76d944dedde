use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::RgbImage;

use crate::color::Color;

const MAX_THUMB_DIM: u32 = 10;

/// Load an image and downsample it to a thumbnail capped at 10 pixels
/// along the longer dimension, preserving aspect ratio.
///
/// The resize always happens, so the pipeline never sees more than ~100
/// pixels regardless of input size.
pub fn load_thumbnail(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).with_context(|| {
        if !path.exists() {
            format!("file not found: {}", path.display())
        } else {
            format!(
                "unsupported or corrupt image: {}. Supported formats: PNG, JPEG, WebP, BMP, TIFF, GIF",
                path.display()
            )
        }
    })?;

    let (width, height) = (img.width(), img.height());
    let (thumb_w, thumb_h) = thumbnail_dimensions(width, height);
    Ok(img.resize_exact(thumb_w, thumb_h, FilterType::Lanczos3).to_rgb8())
}

/// Longer side becomes 10; the shorter side scales down with it, floored.
fn thumbnail_dimensions(width: u32, height: u32) -> (u32, u32) {
    if width > height {
        let h = (u64::from(height) * u64::from(MAX_THUMB_DIM) / u64::from(width)) as u32;
        (MAX_THUMB_DIM, h.max(1))
    } else {
        let w = (u64::from(width) * u64::from(MAX_THUMB_DIM) / u64::from(height)) as u32;
        (w.max(1), MAX_THUMB_DIM)
    }
}

/// Enumerate thumbnail pixels column by column, keep the first occurrence
/// of each distinct channel triple, and sort ascending by whiteness.
///
/// This is the exact sequence the core pipeline consumes.
pub fn distinct_colors(image: &RgbImage) -> Vec<Color> {
    let mut seen: HashSet<[u8; 3]> = HashSet::new();
    let mut colors = Vec::new();
    for x in 0..image.width() {
        for y in 0..image.height() {
            let pixel = image.get_pixel(x, y);
            if seen.insert(pixel.0) {
                colors.push(Color::new(pixel[0], pixel[1], pixel[2]));
            }
        }
    }
    colors.sort_by_key(|color| color.whiteness());
    colors
}
