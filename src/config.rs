use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::shapes::Brush;
use crate::tools::Tool;

pub const MIN_BRUSH_SIZE: u32 = 1;
pub const MAX_BRUSH_SIZE: u32 = 20;

/// Swatches shown next to the color picker
pub const PALETTE: [Color; 7] = [
    Color::rgb(0x1a, 0x1f, 0x2c),
    Color::rgb(0x9b, 0x87, 0xf5),
    Color::rgb(0x7e, 0x69, 0xab),
    Color::rgb(0xff, 0x57, 0x57),
    Color::rgb(0x4c, 0xaf, 0x50),
    Color::rgb(0x21, 0x96, 0xf3),
    Color::rgb(0xff, 0xd7, 0x00),
];

/// Live drawing settings, edited by the toolbar and read by the canvas on
/// every pointer event.
///
/// Persisted between sessions through eframe storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingConfig {
    pub color: Color,
    pub tool: Tool,
    /// Stroke width in pixels, kept within `MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE`
    pub brush_size: u32,
    /// Paint the interior of rectangles, circles and triangles
    pub fill_shapes: bool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            color: PALETTE[0],
            tool: Tool::Pencil,
            brush_size: 5,
            fill_shapes: true,
        }
    }
}

impl DrawingConfig {
    pub fn set_brush_size(&mut self, size: u32) {
        self.brush_size = size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
    }

    /// Color actually painted by `tool`: the eraser always paints white.
    pub fn paint_color(&self, tool: Tool) -> Color {
        if tool == Tool::Eraser {
            Color::WHITE
        } else {
            self.color
        }
    }

    /// Brush for strokes and outlines drawn with `tool`
    pub fn brush(&self, tool: Tool) -> Brush {
        Brush::new(
            self.paint_color(tool),
            self.brush_size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE),
        )
    }
}
