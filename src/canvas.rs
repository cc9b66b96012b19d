//! The drawing surface and its gesture state machine.
//!
//! [`Canvas`] owns the visible pixel buffer, a scratch buffer for shape
//! previews, the undo history and the current gesture. The host feeds it
//! [`InputEvent`]s together with the live [`DrawingConfig`] and sends
//! [`Command`]s for undo, clear and export.
//!
//! Until the first [`Canvas::resize`] there is no buffer and every
//! operation is a silent no-op.

use egui::Pos2;

use crate::color::Color;
use crate::command::{Command, CommandOutcome, CommandResult, History};
use crate::config::DrawingConfig;
use crate::error::{PaintError, PaintResult};
use crate::export;
use crate::fill::flood_fill;
use crate::input::InputEvent;
use crate::pixel_buffer::PixelBuffer;
use crate::shapes::{ShapeKind, draw_segment, draw_shape};
use crate::state::GestureState;
use crate::tools::Tool;

/// The visible buffer plus a same-sized scratch buffer for previews
#[derive(Debug)]
struct Surface {
    buffer: PixelBuffer,
    scratch: PixelBuffer,
}

impl Surface {
    fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: PixelBuffer::new(width, height),
            scratch: PixelBuffer::new(width, height),
        }
    }
}

#[derive(Debug, Default)]
pub struct Canvas {
    surface: Option<Surface>,
    history: History,
    state: GestureState,
    /// Bumped whenever the visible buffer changes
    revision: u64,
}

impl Canvas {
    /// Creates an uninitialized canvas
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a blank white canvas of the given size
    pub fn with_size(width: u32, height: u32) -> Self {
        let mut canvas = Self::new();
        canvas.resize(width, height);
        canvas
    }

    pub fn is_initialized(&self) -> bool {
        self.surface.is_some()
    }

    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.surface.as_ref().map(|surface| &surface.buffer)
    }

    pub fn size(&self) -> Option<[u32; 2]> {
        self.buffer().map(PixelBuffer::size)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Reallocates the canvas at the new size, blank white.
    ///
    /// Content, history and any gesture in progress are discarded: history
    /// snapshots would no longer match the buffer dimensions.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::warn!("Ignoring resize to {}x{}", width, height);
            return;
        }
        if self.size() == Some([width, height]) {
            return;
        }

        log::info!("Canvas resized to {}x{}", width, height);
        self.surface = Some(Surface::new(width, height));
        self.history.clear();
        self.state = GestureState::Idle;
        self.touch();
    }

    /// Feeds one pointer event through the gesture state machine
    pub fn handle_event(&mut self, event: InputEvent, config: &DrawingConfig) {
        if self.surface.is_none() {
            return;
        }
        match event {
            InputEvent::PointerDown(pos) => self.pointer_down(pos, config),
            InputEvent::PointerMove(pos) => self.pointer_move(pos, config),
            // Shapes commit at the last previewed point: a leave position
            // lies off the canvas and an up position may never have been seen
            InputEvent::PointerUp(_) | InputEvent::PointerLeave(_) => self.finish_gesture(config),
        }
    }

    pub fn execute(&mut self, command: Command) -> CommandResult {
        log::info!("Executing command: {}", command.name());
        match command {
            Command::Undo => Ok(self.undo()),
            Command::Clear => Ok(self.clear()),
            Command::Export { path } => {
                let buffer = self.buffer().ok_or(PaintError::NotInitialized)?;
                export::save_png(buffer, &path)?;
                Ok(CommandOutcome::Exported(path))
            }
        }
    }

    /// Restores the state before the most recent gesture.
    ///
    /// A gesture in progress is dropped first, so undoing mid-drag returns
    /// to the state before that drag.
    pub fn undo(&mut self) -> CommandOutcome {
        let Some(surface) = self.surface.as_mut() else {
            return CommandOutcome::Ignored;
        };
        self.state = GestureState::Idle;

        if self.history.undo(&mut surface.buffer) {
            log::debug!("Undo, {} snapshots left", self.history.len());
            self.touch();
            CommandOutcome::Undone
        } else {
            log::info!("Nothing to undo");
            CommandOutcome::NothingToUndo
        }
    }

    /// Paints the whole canvas white, as an undoable step
    pub fn clear(&mut self) -> CommandOutcome {
        if self.surface.is_none() {
            return CommandOutcome::Ignored;
        }
        self.abandon_gesture();

        let Some(surface) = self.surface.as_mut() else {
            return CommandOutcome::Ignored;
        };
        self.history.push(&surface.buffer);
        surface.buffer.fill(Color::WHITE);
        self.touch();
        CommandOutcome::Cleared
    }

    /// PNG encoding of the visible buffer
    pub fn export_png(&self) -> PaintResult<Vec<u8>> {
        let buffer = self.buffer().ok_or(PaintError::NotInitialized)?;
        export::encode_png(buffer)
    }

    fn pointer_down(&mut self, pos: Pos2, config: &DrawingConfig) {
        if let GestureState::Drawing { .. } = self.state {
            log::debug!("Pointer down during a gesture, committing it first");
            self.finish_gesture(config);
        }

        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        self.history.push(&surface.buffer);

        let tool = config.tool;
        if tool == Tool::Fill {
            let filled = flood_fill(&mut surface.buffer, pos, config.paint_color(tool));
            if filled > 0 {
                self.touch();
            }
            return;
        }

        log::debug!("Begin {} gesture at {:?}", tool.name(), pos);
        self.state = GestureState::Drawing {
            tool,
            anchor: pos,
            last_point: pos,
        };
    }

    fn pointer_move(&mut self, pos: Pos2, config: &DrawingConfig) {
        let GestureState::Drawing {
            tool,
            anchor,
            last_point,
        } = self.state
        else {
            return;
        };

        if tool.is_freehand() {
            if let Some(surface) = self.surface.as_mut() {
                draw_segment(&mut surface.buffer, last_point, pos, config.brush(tool));
            }
        } else if let Some(kind) = tool.shape_kind() {
            self.render_shape(kind, tool, anchor, pos, config);
        }

        self.state = GestureState::Drawing {
            tool,
            anchor,
            last_point: pos,
        };
        self.touch();
    }

    /// Ends the current gesture, committing a shape at its last previewed
    /// point.
    fn finish_gesture(&mut self, config: &DrawingConfig) {
        let GestureState::Drawing {
            tool,
            anchor,
            last_point,
        } = std::mem::take(&mut self.state)
        else {
            return;
        };

        if let Some(kind) = tool.shape_kind() {
            self.render_shape(kind, tool, anchor, last_point, config);
            self.touch();
        }
        log::debug!("End {} gesture", tool.name());
    }

    /// Drops a gesture without committing it. A shape preview is replaced by
    /// the pre-gesture state; freehand strokes stay as drawn so far.
    fn abandon_gesture(&mut self) {
        let GestureState::Drawing { tool, .. } = std::mem::take(&mut self.state) else {
            return;
        };
        if tool.shape_kind().is_none() {
            return;
        }
        if let (Some(surface), Some(snapshot)) = (self.surface.as_mut(), self.history.last()) {
            surface.buffer.restore(snapshot);
            self.touch();
        }
    }

    /// Redraws the shape on top of the pre-gesture snapshot.
    ///
    /// The shape is rendered into the scratch buffer and then copied over the
    /// visible buffer wholesale, so each frame fully replaces the previous
    /// preview. Committing is the same operation with the final endpoint.
    fn render_shape(
        &mut self,
        kind: ShapeKind,
        tool: Tool,
        anchor: Pos2,
        current: Pos2,
        config: &DrawingConfig,
    ) {
        let (Some(surface), Some(snapshot)) = (self.surface.as_mut(), self.history.last()) else {
            return;
        };
        surface.scratch.restore(snapshot);
        draw_shape(
            &mut surface.scratch,
            kind,
            anchor,
            current,
            config.brush(tool),
            config.fill_shapes,
        );
        surface.buffer.copy_from(&surface.scratch);
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
