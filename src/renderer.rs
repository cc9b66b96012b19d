use egui::{Color32, ColorImage, Painter, Rect, TextureHandle, TextureOptions, pos2, vec2};

use crate::canvas::Canvas;
use crate::pixel_buffer::PixelBuffer;

/// Keeps a GPU texture in step with the canvas pixels and paints it.
///
/// The texture is only re-uploaded when the canvas revision changes.
#[derive(Default)]
pub struct CanvasRenderer {
    texture: Option<TextureHandle>,
    uploaded_revision: Option<u64>,
}

// Custom Debug implementation since TextureHandle doesn't implement Debug
impl std::fmt::Debug for CanvasRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasRenderer")
            .field("has_texture", &self.texture.is_some())
            .field("uploaded_revision", &self.uploaded_revision)
            .finish()
    }
}

impl CanvasRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads the canvas pixels if they changed since the last upload
    pub fn sync(&mut self, ctx: &egui::Context, canvas: &Canvas) {
        let Some(buffer) = canvas.buffer() else {
            return;
        };
        if self.texture.is_some() && self.uploaded_revision == Some(canvas.revision()) {
            return;
        }

        let image = to_color_image(buffer);
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                self.texture = Some(ctx.load_texture("canvas", image, TextureOptions::NEAREST));
            }
        }
        self.uploaded_revision = Some(canvas.revision());
    }

    /// Paints the canvas texture with its top-left corner at `rect.min`, one
    /// pixel per point.
    pub fn paint(&self, painter: &Painter, rect: Rect) {
        let Some(texture) = &self.texture else {
            return;
        };
        let [width, height] = texture.size();
        let target = Rect::from_min_size(rect.min, vec2(width as f32, height as f32));
        painter.image(
            texture.id(),
            target,
            Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
            Color32::WHITE,
        );
    }
}

/// Converts the buffer into an egui image for upload
pub fn to_color_image(buffer: &PixelBuffer) -> ColorImage {
    ColorImage::from_rgba_unmultiplied(
        [buffer.width() as usize, buffer.height() as usize],
        buffer.as_raw(),
    )
}
