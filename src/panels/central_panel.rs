use egui::{Rect, Sense, vec2};

use crate::canvas::Canvas;
use crate::config::DrawingConfig;
use crate::input::InputHandler;
use crate::renderer::CanvasRenderer;

/// The drawing area. Its size drives the canvas size, and pointer input
/// over it is routed into the canvas.
pub fn central_panel(
    ctx: &egui::Context,
    canvas: &mut Canvas,
    config: &DrawingConfig,
    input: &mut InputHandler,
    renderer: &mut CanvasRenderer,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available = ui.available_rect_before_wrap();
        let width = available.width().floor().max(0.0) as u32;
        let height = available.height().floor().max(0.0) as u32;
        canvas.resize(width, height);

        let canvas_rect = Rect::from_min_size(available.min, vec2(width as f32, height as f32));
        ui.allocate_rect(canvas_rect, Sense::drag())
            .on_hover_cursor(egui::CursorIcon::Crosshair);

        input.set_canvas_rect(canvas_rect);
        for event in input.process_input(ctx) {
            canvas.handle_event(event, config);
        }

        renderer.sync(ctx, canvas);
        renderer.paint(ui.painter(), canvas_rect);
    });
}
