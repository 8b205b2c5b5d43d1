use std::path::PathBuf;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::canvas::{Canvas, Channel, GRID_SIZE, Slot};
use crate::editor::{Direction, TextField};
use crate::sync::{self, SyncError, Target};
use crate::ui::EditorLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// Which widget receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Grid,
    Color(Slot),
    PaletteText,
    GridText,
}

impl Focus {
    const ORDER: [Self; 6] = [
        Self::Grid,
        Self::Color(Slot::One),
        Self::Color(Slot::Two),
        Self::Color(Slot::Three),
        Self::PaletteText,
        Self::GridText,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|&f| f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// The text area this focus edits, if any.
    pub const fn text_target(self) -> Option<Target> {
        match self {
            Self::PaletteText => Some(Target::Palette),
            Self::GridText => Some(Target::Grid),
            Self::Grid | Self::Color(_) => None,
        }
    }

    pub const fn for_target(target: Target) -> Self {
        match target {
            Target::Palette => Self::PaletteText,
            Target::Grid => Self::GridText,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Color(Slot::One) => "color 1",
            Self::Color(Slot::Two) => "color 2",
            Self::Color(Slot::Three) => "color 3",
            Self::PaletteText => "palette text",
            Self::GridText => "grid text",
        }
    }
}

/// The complete editor state.
///
/// All state lives here - no global or scattered state. The two text
/// fields are derived from `canvas` and only flow back on commit.
pub struct Model {
    /// Grid, palette, pen and paint gesture
    pub canvas: Canvas,
    /// Palette as editable JSON
    pub palette_text: TextField,
    /// Grid as editable JSON
    pub grid_text: TextField,
    /// Widget receiving keyboard input
    pub focus: Focus,
    /// Keyboard cursor on the grid `(row, col)`
    pub grid_cursor: (usize, usize),
    /// Channel edited by the color picker
    pub channel: Channel,
    /// Terminal size in columns and rows
    pub terminal_size: (u16, u16),
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
    toast: Option<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("canvas", &self.canvas)
            .field("focus", &self.focus)
            .field("grid_cursor", &self.grid_cursor)
            .field("help_visible", &self.help_visible)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a model around a canvas, with text fields in sync.
    pub fn new(canvas: Canvas, terminal_size: (u16, u16)) -> Self {
        let palette_text = TextField::new(&sync::palette_to_text(canvas.palette()));
        let grid_text = TextField::new(&sync::grid_to_text(canvas.grid()));
        Self {
            canvas,
            palette_text,
            grid_text,
            focus: Focus::Grid,
            grid_cursor: (0, 0),
            channel: Channel::Red,
            terminal_size,
            help_visible: false,
            config_global_path: None,
            config_local_path: None,
            toast: None,
            should_quit: false,
        }
    }

    /// Screen layout for the current terminal size.
    pub fn layout(&self) -> EditorLayout {
        let (width, height) = self.terminal_size;
        EditorLayout::new(Rect::new(0, 0, width, height))
    }

    pub const fn field(&self, target: Target) -> &TextField {
        match target {
            Target::Palette => &self.palette_text,
            Target::Grid => &self.grid_text,
        }
    }

    pub const fn field_mut(&mut self, target: Target) -> &mut TextField {
        match target {
            Target::Palette => &mut self.palette_text,
            Target::Grid => &mut self.grid_text,
        }
    }

    /// Regenerate the palette text from the canvas.
    pub(super) fn sync_palette_text(&mut self) {
        let text = sync::palette_to_text(self.canvas.palette());
        self.palette_text.regenerate(&text);
    }

    /// Regenerate the grid text from the canvas.
    pub(super) fn sync_grid_text(&mut self) {
        let text = sync::grid_to_text(self.canvas.grid());
        self.grid_text.regenerate(&text);
    }

    /// Move focus, confirming the text field being left.
    pub(super) fn set_focus(&mut self, focus: Focus) {
        if self.focus == focus {
            return;
        }
        let previous = std::mem::replace(&mut self.focus, focus);
        if let Some(target) = previous.text_target() {
            self.confirm(target);
        }
    }

    /// Apply an edited text field to the canvas if it parses.
    ///
    /// Unedited fields are left alone. Invalid text stays visible and
    /// the canvas is untouched; the failure is logged and toasted.
    pub(super) fn confirm(&mut self, target: Target) {
        if !self.field(target).is_edited() {
            return;
        }
        match self.commit(target) {
            Ok(changed) => {
                tracing::debug!(field = target.label(), changed, "applied edited text");
                self.show_toast(ToastLevel::Info, format!("Applied {} text", target.label()));
            }
            Err(err) => {
                tracing::warn!(field = target.label(), error = %err, "rejected edited text");
                self.show_toast(
                    ToastLevel::Error,
                    format!("Invalid {} text: {err}", target.label()),
                );
            }
        }
    }

    /// Parse a text field and replace the matching canvas state.
    ///
    /// On success the field is regenerated in canonical form.
    pub(super) fn commit(&mut self, target: Target) -> Result<bool, SyncError> {
        let text = self.field(target).text();
        let changed = match target {
            Target::Palette => {
                let palette = sync::parse_palette(&text)?;
                let changed = self.canvas.replace_palette(palette);
                self.sync_palette_text();
                changed
            }
            Target::Grid => {
                let grid = sync::parse_grid(&text)?;
                let changed = self.canvas.replace_grid(grid);
                self.sync_grid_text();
                changed
            }
        };
        Ok(changed)
    }

    pub(super) fn move_grid_cursor(&mut self, direction: Direction) {
        let (row, col) = self.grid_cursor;
        let last = GRID_SIZE - 1;
        self.grid_cursor = match direction {
            Direction::Up => (row.saturating_sub(1), col),
            Direction::Down => ((row + 1).min(last), col),
            Direction::Left => (row, col.saturating_sub(1)),
            Direction::Right => (row, (col + 1).min(last)),
        };
    }

    /// Whether either text field holds uncommitted edits.
    pub const fn has_pending_edits(&self) -> bool {
        self.palette_text.is_edited() || self.grid_text.is_edited()
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Canvas::default(), (80, 24))
    }
}
