use egui::Pos2;
use image::RgbaImage;

use crate::color::Color;

/// A fixed-size RGBA8 raster.
///
/// Coordinates are signed so callers can hand in stray positions (a stroke
/// that runs off the edge, a shape centred outside the canvas). Anything
/// outside the buffer reads as `None` and writes are dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: RgbaImage,
}

/// An immutable full copy of a pixel buffer, taken for undo and previews.
#[derive(Clone, PartialEq, Eq)]
pub struct Snapshot {
    pixels: RgbaImage,
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("width", &self.pixels.width())
            .field("height", &self.pixels.height())
            .finish()
    }
}

impl PixelBuffer {
    /// Creates a blank buffer: white and fully opaque.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, Color::WHITE.to_rgba()),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn size(&self) -> [u32; 2] {
        [self.width(), self.height()]
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }

    /// Maps a buffer-local point to the pixel it falls in.
    pub fn pixel_at(&self, point: Pos2) -> Option<(i32, i32)> {
        let (x, y) = (point.x.floor(), point.y.floor());
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let (x, y) = (x as i32, y as i32);
        self.contains(x, y).then_some((x, y))
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.get_rgba(x, y).map(Color::from)
    }

    pub fn get_rgba(&self, x: i32, y: i32) -> Option<image::Rgba<u8>> {
        self.contains(x, y)
            .then(|| *self.pixels.get_pixel(x as u32, y as u32))
    }

    /// Opaque write. Out-of-bounds coordinates are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if self.contains(x, y) {
            self.pixels.put_pixel(x as u32, y as u32, color.to_rgba());
        }
    }

    /// Horizontal span from `x0` to `x1` inclusive, clipped to the buffer.
    pub fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Color) {
        if y < 0 || y as u32 >= self.height() || self.width() == 0 {
            return;
        }
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let start = x0.max(0);
        let end = x1.min(self.width() as i32 - 1);
        for x in start..=end {
            self.pixels.put_pixel(x as u32, y as u32, color.to_rgba());
        }
    }

    /// Paints every pixel with `color`.
    pub fn fill(&mut self, color: Color) {
        let rgba = color.to_rgba();
        for pixel in self.pixels.pixels_mut() {
            *pixel = rgba;
        }
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pixels: self.pixels.clone(),
        }
    }

    /// Replaces the whole buffer with the snapshot contents.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.copy_raw(&snapshot.pixels);
    }

    /// Whole-buffer copy from another buffer.
    pub fn copy_from(&mut self, other: &PixelBuffer) {
        self.copy_raw(&other.pixels);
    }

    fn copy_raw(&mut self, source: &RgbaImage) {
        if source.dimensions() == self.pixels.dimensions() {
            self.pixels.copy_from_slice(source.as_raw());
        } else {
            log::warn!(
                "Replacing {}x{} buffer with {}x{} content",
                self.width(),
                self.height(),
                source.width(),
                source.height()
            );
            self.pixels = source.clone();
        }
    }
}

impl Snapshot {
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }
}
