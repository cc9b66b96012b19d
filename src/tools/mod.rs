use serde::{Deserialize, Serialize};

use crate::shapes::ShapeKind;

/// The drawing tools offered by the toolbar.
///
/// A tool decides how a pointer gesture is interpreted: freehand tools paint
/// as the pointer moves, `Fill` acts once on pointer-down, and shape tools
/// preview while dragging and commit on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Pencil,
    /// Pencil that always paints the background white
    Eraser,
    Fill,
    Line,
    Rectangle,
    Circle,
    Triangle,
}

impl Tool {
    pub const ALL: [Tool; 7] = [
        Tool::Pencil,
        Tool::Eraser,
        Tool::Fill,
        Tool::Line,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Triangle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Pencil => "Pencil",
            Self::Eraser => "Eraser",
            Self::Fill => "Fill",
            Self::Line => "Line",
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
            Self::Triangle => "Triangle",
        }
    }

    /// Toolbar label with an icon glyph from the default egui fonts
    pub fn label(self) -> &'static str {
        match self {
            Self::Pencil => "✏ Pencil",
            Self::Eraser => "⌫ Eraser",
            Self::Fill => "🖌 Fill",
            Self::Line => "╱ Line",
            Self::Rectangle => "◻ Rectangle",
            Self::Circle => "○ Circle",
            Self::Triangle => "△ Triangle",
        }
    }

    /// The geometry drawn by shape tools, `None` for the others
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Self::Line => Some(ShapeKind::Line),
            Self::Rectangle => Some(ShapeKind::Rectangle),
            Self::Circle => Some(ShapeKind::Circle),
            Self::Triangle => Some(ShapeKind::Triangle),
            Self::Pencil | Self::Eraser | Self::Fill => None,
        }
    }

    pub fn is_freehand(self) -> bool {
        matches!(self, Self::Pencil | Self::Eraser)
    }

    /// Whether the fill-shapes option has any effect on this tool
    pub fn uses_fill_option(self) -> bool {
        matches!(self, Self::Rectangle | Self::Circle | Self::Triangle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tool_has_exactly_one_behavior() {
        for tool in Tool::ALL {
            let behaviors = [
                tool.is_freehand(),
                tool == Tool::Fill,
                tool.shape_kind().is_some(),
            ];
            assert_eq!(
                behaviors.iter().filter(|b| **b).count(),
                1,
                "{} should be freehand, fill or shape",
                tool.name()
            );
        }
    }

    #[test]
    fn test_line_ignores_fill_option() {
        assert_eq!(Tool::Line.shape_kind(), Some(ShapeKind::Line));
        assert!(!Tool::Line.uses_fill_option());
        assert!(Tool::Triangle.uses_fill_option());
    }
}
