#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod color;
pub mod command;
pub mod config;
pub mod error;
pub mod export;
pub mod fill;
pub mod input;
pub mod notice;
pub mod panels;
pub mod pixel_buffer;
pub mod renderer;
pub mod shapes;
pub mod state;
pub mod tools;

pub use app::PaintApp;
pub use canvas::Canvas;
pub use color::{Color, FILL_TOLERANCE, color_match};
pub use command::{Command, CommandOutcome, CommandResult, History};
pub use config::DrawingConfig;
pub use error::PaintError;
pub use fill::flood_fill;
pub use input::{InputEvent, InputHandler};
pub use pixel_buffer::{PixelBuffer, Snapshot};
pub use renderer::CanvasRenderer;
pub use shapes::{Brush, ShapeKind, draw_shape};
pub use state::GestureState;
pub use tools::Tool;
