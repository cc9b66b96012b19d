mod history;

use std::path::PathBuf;

use crate::error::PaintError;

pub use history::History;

/// Default file name used when saving the canvas
pub const DEFAULT_EXPORT_NAME: &str = "drawing.png";

/// Requests sent from the host UI to the canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Restore the state before the most recent gesture
    Undo,
    /// Paint the whole canvas white (undoable)
    Clear,
    /// Encode the canvas as PNG and write it to `path`
    Export { path: PathBuf },
}

impl Command {
    /// Export to [`DEFAULT_EXPORT_NAME`] in the working directory
    pub fn export_default() -> Self {
        Self::Export {
            path: PathBuf::from(DEFAULT_EXPORT_NAME),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Undo => "Undo",
            Self::Clear => "Clear",
            Self::Export { .. } => "Export",
        }
    }
}

/// What a successfully handled command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Undone,
    /// Undo was requested with an empty history
    NothingToUndo,
    Cleared,
    Exported(PathBuf),
    /// The canvas is not initialized yet
    Ignored,
}

impl CommandOutcome {
    /// Short user-facing description
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::Undone => None,
            Self::NothingToUndo => Some("Nothing to undo".to_owned()),
            Self::Cleared => Some("Canvas cleared!".to_owned()),
            Self::Exported(path) => Some(format!("Saved {}", path.display())),
            Self::Ignored => None,
        }
    }
}

/// Result type for command execution
pub type CommandResult = Result<CommandOutcome, PaintError>;
