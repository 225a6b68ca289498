use std::path::Path;

use anyhow::{Context, Result};
use image::GrayImage;

pub const FOREGROUND: u8 = 255;

pub fn read_print(path: &Path) -> Result<GrayImage> {
    let img = image::open(path)
        .with_context(|| format!("failed to decode print {}", path.display()))?;
    Ok(img.to_luma8())
}

pub fn white_pixels(img: &GrayImage) -> u64 {
    img.pixels().filter(|p| p.0[0] == FOREGROUND).count() as u64
}

pub fn print_area(folder: &Path, file_name: &str) -> Result<u64> {
    Ok(white_pixels(&read_print(&folder.join(file_name))?))
}
