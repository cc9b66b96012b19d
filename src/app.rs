use std::time::Duration;

use crate::canvas::Canvas;
use crate::command::Command;
use crate::config::DrawingConfig;
use crate::input::InputHandler;
use crate::notice::Notices;
use crate::panels::{central_panel, status_panel, tools_panel};
use crate::renderer::CanvasRenderer;

const UNDO_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Z);

const WELCOME: &str = "Welcome to the Drawing App! Start drawing on the canvas.";

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
/// Only the drawing settings are kept; the pixels are never persisted.
#[derive(serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PaintApp {
    config: DrawingConfig,
    #[serde(skip)]
    canvas: Canvas,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    renderer: CanvasRenderer,
    #[serde(skip)]
    notices: Notices,
    #[serde(skip)]
    greeted: bool,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        if let Some(storage) = cc.storage {
            if let Some(app) = eframe::get_value::<Self>(storage, eframe::APP_KEY) {
                log::info!("Restored drawing settings: {:?}", app.config);
                return app;
            }
        }
        Default::default()
    }

    /// Runs a command against the canvas and reports the outcome as a notice
    pub fn execute_command(&mut self, command: Command, now: f64) {
        match self.canvas.execute(command) {
            Ok(outcome) => {
                if let Some(text) = outcome.notice() {
                    self.notices.show(text, now);
                }
            }
            Err(err) => {
                log::error!("Command failed: {}", err);
                self.notices.show(err.to_string(), now);
            }
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        if !self.greeted {
            self.notices.show(WELCOME, now);
            self.greeted = true;
        }

        let mut commands = tools_panel(ctx, &mut self.config);
        if ctx.input_mut(|i| i.consume_shortcut(&UNDO_SHORTCUT)) {
            commands.push(Command::Undo);
        }
        for command in commands {
            self.execute_command(command, now);
        }

        status_panel(ctx, &self.canvas, self.notices.current(now));
        central_panel(
            ctx,
            &mut self.canvas,
            &self.config,
            &mut self.input,
            &mut self.renderer,
        );

        if let Some(left) = self.notices.remaining(now) {
            ctx.request_repaint_after(Duration::from_secs_f64(left));
        }
    }
}
