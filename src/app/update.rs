use crate::app::Model;
use crate::app::model::Focus;
use crate::canvas::{Channel, Ink, Slot};
use crate::editor::Direction;
use crate::sync::Target;

/// All possible events and actions in the editor.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Painting
    /// Pointer pressed on a grid cell `(row, col)`
    BeginStroke(usize, usize),
    /// Pointer dragged into a grid cell
    ContinueStroke(usize, usize),
    /// Pointer released anywhere
    EndStroke,
    /// Paint the cell under the keyboard cursor
    PaintAtCursor,
    /// Move the keyboard cursor on the grid
    MoveGridCursor(Direction),
    /// Reset every cell to transparent
    ClearGrid,

    // Palette and pen
    /// Choose the value strokes write
    SelectPen(Ink),
    /// Shift one channel of a palette color
    AdjustColor(Slot, Channel, i16),
    /// Pick the next channel in the color picker
    NextChannel,
    /// Pick the previous channel in the color picker
    PrevChannel,

    // Focus
    /// Focus a widget (confirms a text field being left)
    Focus(Focus),
    /// Cycle focus forward
    FocusNext,
    /// Cycle focus backward
    FocusPrev,

    // Text areas
    /// Insert a character in the focused text field
    TextInput(char),
    /// Split the line at the cursor
    TextNewline,
    /// Delete before the cursor
    TextBackspace,
    /// Delete at the cursor
    TextDelete,
    /// Move the text cursor
    TextMove(Direction),
    /// Cursor to line start
    TextHome,
    /// Cursor to line end
    TextEnd,
    /// Click inside a text area at `(line, col)`
    TextClick(Target, usize, usize),

    // Clipboard
    /// Copy the grid text area
    CopyGridText,
    /// Copy the palette text area
    CopyPaletteText,

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// No side effects should occur in this function.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        // Painting
        Message::BeginStroke(row, col) => {
            model.set_focus(Focus::Grid);
            model.grid_cursor = (row, col);
            if model.canvas.begin_stroke(row, col) {
                model.sync_grid_text();
            }
        }
        Message::ContinueStroke(row, col) => {
            if model.canvas.is_drawing() {
                model.grid_cursor = (row, col);
            }
            if model.canvas.continue_stroke(row, col) {
                model.sync_grid_text();
            }
        }
        Message::EndStroke => model.canvas.end_stroke(),
        Message::PaintAtCursor => {
            let (row, col) = model.grid_cursor;
            let changed = model.canvas.begin_stroke(row, col);
            model.canvas.end_stroke();
            if changed {
                model.sync_grid_text();
            }
        }
        Message::MoveGridCursor(direction) => model.move_grid_cursor(direction),
        Message::ClearGrid => {
            if model.canvas.clear() {
                model.sync_grid_text();
            }
        }

        // Palette and pen
        Message::SelectPen(ink) => {
            if model.focus.text_target().is_some() {
                model.set_focus(Focus::Grid);
            }
            model.canvas.set_pen(ink);
        }
        Message::AdjustColor(slot, channel, delta) => {
            // Apply a pending palette edit before shifting the color it names.
            if model.focus.text_target().is_some() {
                model.set_focus(Focus::Color(slot));
            }
            model.channel = channel;
            if model.canvas.adjust_channel(slot, channel, delta) {
                model.sync_palette_text();
            }
        }
        Message::NextChannel => model.channel = model.channel.next(),
        Message::PrevChannel => model.channel = model.channel.prev(),

        // Focus
        Message::Focus(focus) => model.set_focus(focus),
        Message::FocusNext => {
            let next = model.focus.next();
            model.set_focus(next);
        }
        Message::FocusPrev => {
            let prev = model.focus.prev();
            model.set_focus(prev);
        }

        // Text areas
        Message::TextInput(ch) => {
            if let Some(target) = model.focus.text_target() {
                model.field_mut(target).edit().insert_char(ch);
            }
        }
        Message::TextNewline => {
            if let Some(target) = model.focus.text_target() {
                model.field_mut(target).edit().split_line();
            }
        }
        Message::TextBackspace => {
            if let Some(target) = model.focus.text_target() {
                model.field_mut(target).delete_back();
            }
        }
        Message::TextDelete => {
            if let Some(target) = model.focus.text_target() {
                model.field_mut(target).delete_forward();
            }
        }
        Message::TextMove(direction) => {
            if let Some(target) = model.focus.text_target() {
                model.field_mut(target).navigate().move_cursor(direction);
            }
        }
        Message::TextHome => {
            if let Some(target) = model.focus.text_target() {
                model.field_mut(target).navigate().move_home();
            }
        }
        Message::TextEnd => {
            if let Some(target) = model.focus.text_target() {
                model.field_mut(target).navigate().move_end();
            }
        }
        Message::TextClick(target, line, col) => {
            model.set_focus(Focus::for_target(target));
            model.field_mut(target).navigate().move_to(line, col);
        }

        // Clipboard is handled as a side effect
        Message::CopyGridText | Message::CopyPaletteText => {}

        // Window
        Message::Resize(width, height) => model.terminal_size = (width, height),
        Message::ToggleHelp => model.help_visible = !model.help_visible,
        Message::HideHelp => model.help_visible = false,

        // Application
        Message::Quit => model.should_quit = true,
    }

    model
}
