//! I/O helpers bridging grayscale image files and integer pixel buffers.
//!
//! - `load_grayscale_image`: read a BMP/PNG/JPEG/etc. into a `PixelBuffer`.
//! - `save_grayscale_image`: write a `PixelBuffer` to disk, clamping to [0, 255].
use super::PixelBuffer;
use image::{DynamicImage, ImageBuffer, Luma};
use std::fs;
use std::path::Path;

/// Load an image from disk, convert to 8-bit grayscale, and widen to i32.
pub fn load_grayscale_image(path: &Path) -> Result<PixelBuffer, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw().into_iter().map(i32::from).collect();
    Ok(PixelBuffer::from_raw(width, height, data))
}

/// Save a pixel buffer to a grayscale image file, clamping values to [0, 255].
pub fn save_grayscale_image(buffer: &PixelBuffer, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let data: Vec<u8> = buffer
        .as_slice()
        .iter()
        .map(|&px| px.clamp(0, 255) as u8)
        .collect();
    let image: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_raw(buffer.w as u32, buffer.h as u32, data)
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageLuma8(image)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
