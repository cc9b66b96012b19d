use egui::Pos2;

use crate::tools::Tool;

/// Where the canvas is within a pointer gesture
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Drawing {
        /// Tool captured at pointer-down
        tool: Tool,
        /// Where the gesture started
        anchor: Pos2,
        /// Most recent pointer position seen during the gesture
        last_point: Pos2,
    },
}

impl GestureState {
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Drawing { .. } => "Drawing",
        }
    }
}
