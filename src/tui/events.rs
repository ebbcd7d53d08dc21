//! Custom event types for the browser TUI.

use std::path::PathBuf;

use crossterm::event::KeyEvent;

use crate::render::Rendered;

/// Events that can occur in the browser
#[derive(Debug)]
pub enum TuiEvent {
    /// User keyboard input
    Key(KeyEvent),
    /// A render task finished for the named file
    Rendered { filename: String, rendered: Rendered },
    /// A render task failed outright (file unreadable)
    RenderFailed { filename: String, error: String },
    /// Download completed at the given path
    Downloaded(PathBuf),
    /// Download failed
    DownloadFailed(String),
}
