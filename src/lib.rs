// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. canvas::Canvas)
    clippy::module_name_repetitions
)]

//! # pixgrid
//!
//! A terminal pixel-art editor for 8x8 sprites.
//!
//! - Paint with the mouse (drag) or keyboard
//! - Three user-chosen colors plus transparency
//! - Live JSON views of the palette and grid that can be edited and
//!   applied back
//!
//! ## Architecture
//!
//! pixgrid uses The Elm Architecture (TEA) pattern:
//! - **Model**: Editor state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`canvas`]: Grid, palette, pen and the paint engine
//! - [`sync`]: Text encodings and validated parsing
//! - [`editor`]: Editable text areas
//! - [`app`]: Main application loop and state
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved default flags

pub mod app;
pub mod canvas;
pub mod config;
pub mod editor;
pub mod sync;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::canvas::{Canvas, Grid, Ink, Palette, Rgb};
}
