use crate::canvas::Canvas;

/// Bottom bar: the current notice on the left, canvas facts on the right.
pub fn status_panel(ctx: &egui::Context, canvas: &Canvas, notice: Option<&str>) {
    egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(notice.unwrap_or_default());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some([width, height]) = canvas.size() {
                    ui.label(format!(
                        "{}×{}  |  {}  |  undo steps: {}",
                        width,
                        height,
                        canvas.state().name(),
                        canvas.history().len()
                    ));
                }
            });
        });
    });
}
