use egui::{Context, Pos2, Rect};

/// Pointer events delivered to the canvas, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown(Pos2),
    /// Pointer moved while the button is held
    PointerMove(Pos2),
    /// Primary button released
    PointerUp(Pos2),
    /// Pointer left the canvas while the button was held, at the first
    /// position seen outside it
    PointerLeave(Pos2),
}

/// One frame of primary-pointer state, in screen coordinates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerSample {
    /// Latest known pointer position, `None` once it has left the window
    pub pos: Option<Pos2>,
    /// Every position the pointer moved through during the frame, oldest first
    pub moves: Vec<Pos2>,
    pub pressed: bool,
    pub down: bool,
    pub released: bool,
}

impl PointerSample {
    fn from_egui(input: &egui::InputState) -> Self {
        let moves = input
            .events
            .iter()
            .filter_map(|event| match event {
                egui::Event::PointerMoved(pos) => Some(*pos),
                _ => None,
            })
            .collect();

        Self {
            pos: input.pointer.latest_pos(),
            moves,
            pressed: input.pointer.primary_pressed(),
            down: input.pointer.primary_down(),
            released: input.pointer.primary_released(),
        }
    }
}

/// Turns raw egui pointer state into canvas [`InputEvent`]s.
///
/// A gesture only starts when the button goes down inside the canvas. Once
/// it has started, the gesture ends either on release or as soon as the
/// pointer leaves the canvas.
#[derive(Debug)]
pub struct InputHandler {
    canvas_rect: Rect,
    last_pointer_pos: Option<Pos2>,
    tracking: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_pointer_pos: None,
            tracking: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let sample = ctx.input(PointerSample::from_egui);
        self.update(sample)
    }

    pub fn update(&mut self, sample: PointerSample) -> Vec<InputEvent> {
        let mut events = Vec::new();

        match sample.pos {
            Some(pos) if sample.pressed && self.canvas_rect.contains(pos) => {
                self.tracking = true;
                events.push(InputEvent::PointerDown(self.to_local(pos)));
            }
            Some(pos) if self.tracking => {
                let held = sample.down || sample.released;
                for point in sample.moves.iter().copied().chain(std::iter::once(pos)) {
                    if !self.tracking {
                        break;
                    }
                    self.track_to(point, held, &mut events);
                }
            }
            None if self.tracking => {
                let last = self.last_pointer_pos.unwrap_or(self.canvas_rect.min);
                events.push(InputEvent::PointerLeave(self.to_local(last)));
                self.tracking = false;
            }
            _ => {}
        }

        if self.tracking && (sample.released || !sample.down) {
            let pos = sample
                .pos
                .or(self.last_pointer_pos)
                .unwrap_or(self.canvas_rect.min);
            events.push(InputEvent::PointerUp(self.to_local(pos)));
            self.tracking = false;
        }

        if sample.pos.is_some() {
            self.last_pointer_pos = sample.pos;
        }

        events
    }

    /// Follows the pointer to `pos` during a gesture
    fn track_to(&mut self, pos: Pos2, held: bool, events: &mut Vec<InputEvent>) {
        if !self.canvas_rect.contains(pos) {
            events.push(InputEvent::PointerLeave(self.to_local(pos)));
            self.tracking = false;
        } else if held && Some(pos) != self.last_pointer_pos {
            events.push(InputEvent::PointerMove(self.to_local(pos)));
            self.last_pointer_pos = Some(pos);
        }
    }

    fn to_local(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn handler() -> InputHandler {
        InputHandler::new(Rect::from_min_max(pos2(100.0, 50.0), pos2(300.0, 250.0)))
    }

    fn sample(x: f32, y: f32, pressed: bool, down: bool, released: bool) -> PointerSample {
        PointerSample {
            pos: Some(pos2(x, y)),
            moves: Vec::new(),
            pressed,
            down,
            released,
        }
    }

    #[test]
    fn test_drag_produces_down_move_up_in_local_coords() {
        let mut input = handler();
        assert_eq!(
            input.update(sample(110.0, 60.0, true, true, false)),
            vec![InputEvent::PointerDown(pos2(10.0, 10.0))]
        );
        assert_eq!(
            input.update(sample(120.0, 70.0, false, true, false)),
            vec![InputEvent::PointerMove(pos2(20.0, 20.0))]
        );
        // No movement, no event
        assert!(input.update(sample(120.0, 70.0, false, true, false)).is_empty());
        assert_eq!(
            input.update(sample(120.0, 70.0, false, false, true)),
            vec![InputEvent::PointerUp(pos2(20.0, 20.0))]
        );
        assert!(!input.is_tracking());
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut input = handler();
        assert!(input.update(sample(10.0, 10.0, true, true, false)).is_empty());
        assert!(input.update(sample(150.0, 100.0, false, true, false)).is_empty());
    }

    #[test]
    fn test_leaving_the_canvas_ends_the_gesture() {
        let mut input = handler();
        input.update(sample(110.0, 60.0, true, true, false));
        assert_eq!(
            input.update(sample(350.0, 60.0, false, true, false)),
            vec![InputEvent::PointerLeave(pos2(250.0, 10.0))]
        );
        // Coming back with the button still held does not resume drawing
        assert!(input.update(sample(150.0, 60.0, false, true, false)).is_empty());
    }

    #[test]
    fn test_click_within_one_frame() {
        let mut input = handler();
        assert_eq!(
            input.update(sample(110.0, 60.0, true, false, true)),
            vec![
                InputEvent::PointerDown(pos2(10.0, 10.0)),
                InputEvent::PointerUp(pos2(10.0, 10.0)),
            ]
        );
    }

    #[test]
    fn test_moves_within_a_frame_are_replayed_in_order() {
        let mut input = handler();
        input.update(sample(110.0, 60.0, true, true, false));

        let mut frame = sample(150.0, 90.0, false, true, false);
        frame.moves = vec![pos2(130.0, 60.0), pos2(140.0, 80.0), pos2(150.0, 90.0)];
        assert_eq!(
            input.update(frame),
            vec![
                InputEvent::PointerMove(pos2(30.0, 10.0)),
                InputEvent::PointerMove(pos2(40.0, 30.0)),
                InputEvent::PointerMove(pos2(50.0, 40.0)),
            ]
        );
    }

    #[test]
    fn test_leave_within_a_frame_stops_further_moves() {
        let mut input = handler();
        input.update(sample(110.0, 60.0, true, true, false));

        let mut frame = sample(150.0, 90.0, false, true, false);
        frame.moves = vec![pos2(130.0, 60.0), pos2(50.0, 60.0), pos2(150.0, 90.0)];
        assert_eq!(
            input.update(frame),
            vec![
                InputEvent::PointerMove(pos2(30.0, 10.0)),
                InputEvent::PointerLeave(pos2(-50.0, 10.0)),
            ]
        );
        assert!(!input.is_tracking());
    }

    #[test]
    fn test_release_after_moving_reports_the_release_point_first() {
        let mut input = handler();
        input.update(sample(110.0, 60.0, true, true, false));
        assert_eq!(
            input.update(sample(130.0, 90.0, false, false, true)),
            vec![
                InputEvent::PointerMove(pos2(30.0, 40.0)),
                InputEvent::PointerUp(pos2(30.0, 40.0)),
            ]
        );
    }
}
