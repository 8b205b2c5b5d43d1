//! Editor state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete editor state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Focus, Model, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::canvas::{Ink, Palette};

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    palette: Palette,
    pen: Ink,
    print_on_exit: bool,
    config_global_path: Option<PathBuf>,
    config_local_path: Option<PathBuf>,
}

impl App {
    /// Create an editor with the default palette and pen 1.
    pub fn new() -> Self {
        Self {
            palette: Palette::default(),
            pen: Ink::One,
            print_on_exit: false,
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// Set the starting palette.
    #[must_use]
    pub const fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the starting pen.
    #[must_use]
    pub const fn with_pen(mut self, pen: Ink) -> Self {
        self.pen = pen;
        self
    }

    /// Print the grid and palette text to stdout after the terminal is restored.
    #[must_use]
    pub const fn with_print_on_exit(mut self, enabled: bool) -> Self {
        self.print_on_exit = enabled;
        self
    }

    /// Set config paths to show in help.
    #[must_use]
    pub fn with_config_paths(
        mut self,
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
    ) -> Self {
        self.config_global_path = global_path;
        self.config_local_path = local_path;
        self
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
