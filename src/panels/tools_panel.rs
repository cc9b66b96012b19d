use egui::{Color32, Response, Sense, Ui};

use crate::color::Color;
use crate::command::Command;
use crate::config::{DrawingConfig, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE, PALETTE};
use crate::tools::Tool;

/// Toolbar across the top of the window.
///
/// Edits `config` in place and returns the commands requested this frame.
pub fn tools_panel(ctx: &egui::Context, config: &mut DrawingConfig) -> Vec<Command> {
    let mut commands = Vec::new();

    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            for tool in Tool::ALL {
                if ui.selectable_label(config.tool == tool, tool.label()).clicked() {
                    log::info!("Tool selected from UI: {}", tool.name());
                    config.tool = tool;
                }
            }

            ui.separator();

            ui.label("Size:");
            let mut size = config.brush_size;
            if ui
                .add(egui::Slider::new(&mut size, MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE))
                .changed()
            {
                config.set_brush_size(size);
            }
            ui.add_enabled(
                config.tool.uses_fill_option(),
                egui::Checkbox::new(&mut config.fill_shapes, "Fill shapes"),
            );

            ui.separator();

            ui.label("Color:");
            for swatch in PALETTE {
                if color_swatch(ui, swatch, config.color == swatch).clicked() {
                    config.color = swatch;
                }
            }
            let mut rgb = config.color.to_array();
            if egui::color_picker::color_edit_button_srgb(ui, &mut rgb).changed() {
                config.color = Color::from(rgb);
            }

            ui.separator();

            if ui.button("⟲ Undo").on_hover_text("Ctrl+Z").clicked() {
                commands.push(Command::Undo);
            }
            if ui.button("🗑 Clear").clicked() {
                commands.push(Command::Clear);
            }
            if ui.button("💾 Save").clicked() {
                commands.push(Command::export_default());
            }
        });
    });

    commands
}

fn color_swatch(ui: &mut Ui, color: Color, selected: bool) -> Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(22.0, 22.0), Sense::click());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.circle_filled(rect.center(), 9.0, Color32::from(color));
        if selected {
            painter.circle_stroke(rect.center(), 10.5, ui.visuals().selection.stroke);
        }
    }
    response.on_hover_text(color.to_hex())
}
