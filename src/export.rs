use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::error::PaintResult;
use crate::pixel_buffer::PixelBuffer;

/// Encodes the buffer as an RGBA PNG
pub fn encode_png(buffer: &PixelBuffer) -> PaintResult<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        buffer.as_raw(),
        buffer.width(),
        buffer.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(bytes)
}

/// Encodes the buffer as PNG and writes it to `path`
pub fn save_png(buffer: &PixelBuffer, path: &Path) -> PaintResult<()> {
    let bytes = encode_png(buffer)?;
    std::fs::write(path, &bytes)?;
    log::info!(
        "Saved {}x{} image to {} ({} bytes)",
        buffer.width(),
        buffer.height(),
        path.display(),
        bytes.len()
    );
    Ok(())
}
