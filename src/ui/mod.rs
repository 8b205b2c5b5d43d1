//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`layout`]: Screen regions and hit-testing
//! - [`style`]: Colors, swatches and the transparency checkerboard

pub mod layout;
pub mod style;

mod overlays;
mod render;
mod status;

pub use layout::EditorLayout;
pub use render::render;
