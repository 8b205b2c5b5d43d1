use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Frame;

use crate::app::{App, Focus, Message, Model};
use crate::canvas::{Ink, Slot, Stroke};
use crate::editor::Direction;
use crate::ui::layout::text_position;

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model),
            Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        let layout = model.layout();
        let (x, y) = (mouse.column, mouse.row);

        // Nothing is drawn where the pointer lands on an undersized screen.
        if !layout.fits() {
            let ends_stroke = matches!(mouse.kind, MouseEventKind::Up(MouseButton::Left))
                && model.canvas.is_drawing();
            return ends_stroke.then_some(Message::EndStroke);
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if model.help_visible {
                    return Some(Message::HideHelp);
                }
                if let Some((row, col)) = layout.cell_at(x, y) {
                    return Some(Message::BeginStroke(row, col));
                }
                if let Some(ink) = layout.pen_at(x, y) {
                    return Some(Message::SelectPen(ink));
                }
                if let Some(slot) = layout.color_at(x, y) {
                    return Some(Message::Focus(Focus::Color(slot)));
                }
                if let Some(target) = layout.text_target_at(x, y) {
                    let (line, col) =
                        text_position(model.field(target).buffer(), layout.text_area(target), x, y);
                    return Some(Message::TextClick(target, line, col));
                }
                // Clicking empty space confirms a text field being edited.
                model
                    .focus
                    .text_target()
                    .map(|_| Message::Focus(Focus::Grid))
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Stroke::Drawing { last } = model.canvas.stroke() else {
                    return None;
                };
                layout
                    .cell_at(x, y)
                    .filter(|&cell| cell != last)
                    .map(|(row, col)| Message::ContinueStroke(row, col))
            }
            MouseEventKind::Up(MouseButton::Left) => {
                model.canvas.is_drawing().then_some(Message::EndStroke)
            }
            MouseEventKind::ScrollUp => layout
                .color_at(x, y)
                .map(|slot| Message::AdjustColor(slot, model.channel, 1)),
            MouseEventKind::ScrollDown => layout
                .color_at(x, y)
                .map(|slot| Message::AdjustColor(slot, model.channel, -1)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return Some(Message::HideHelp);
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c' | 'q') if ctrl => return Some(Message::Quit),
            KeyCode::Tab => return Some(Message::FocusNext),
            KeyCode::BackTab => return Some(Message::FocusPrev),
            KeyCode::F(1) => return Some(Message::ToggleHelp),
            _ => {}
        }

        match model.focus {
            Focus::Grid => Self::handle_grid_key(key),
            Focus::Color(slot) => Self::handle_color_key(key, slot, model),
            Focus::PaletteText | Focus::GridText => Self::handle_text_key(key),
        }
    }

    fn handle_grid_key(key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Char('k') | KeyCode::Up => Some(Message::MoveGridCursor(Direction::Up)),
            KeyCode::Char('j') | KeyCode::Down => Some(Message::MoveGridCursor(Direction::Down)),
            KeyCode::Char('h') | KeyCode::Left => Some(Message::MoveGridCursor(Direction::Left)),
            KeyCode::Char('l') | KeyCode::Right => {
                Some(Message::MoveGridCursor(Direction::Right))
            }
            KeyCode::Char(' ') | KeyCode::Enter => Some(Message::PaintAtCursor),
            KeyCode::Char('x') => Some(Message::ClearGrid),
            KeyCode::Char('y') => Some(Message::CopyGridText),
            KeyCode::Char('Y') => Some(Message::CopyPaletteText),
            KeyCode::Char('?') => Some(Message::ToggleHelp),
            KeyCode::Char('q') => Some(Message::Quit),
            KeyCode::Char(c) => pen_for_digit(c).map(Message::SelectPen),
            _ => None,
        }
    }

    fn handle_color_key(key: KeyEvent, slot: Slot, model: &Model) -> Option<Message> {
        let channel = model.channel;
        match key.code {
            KeyCode::Left => Some(Message::PrevChannel),
            KeyCode::Right => Some(Message::NextChannel),
            KeyCode::Up => Some(Message::AdjustColor(slot, channel, 1)),
            KeyCode::Down => Some(Message::AdjustColor(slot, channel, -1)),
            KeyCode::PageUp => Some(Message::AdjustColor(slot, channel, 16)),
            KeyCode::PageDown => Some(Message::AdjustColor(slot, channel, -16)),
            KeyCode::Esc => Some(Message::Focus(Focus::Grid)),
            KeyCode::Char('?') => Some(Message::ToggleHelp),
            KeyCode::Char('q') => Some(Message::Quit),
            KeyCode::Char(c) => pen_for_digit(c).map(Message::SelectPen),
            _ => None,
        }
    }

    fn handle_text_key(key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Esc => Some(Message::Focus(Focus::Grid)),
            KeyCode::Enter => Some(Message::TextNewline),
            KeyCode::Backspace => Some(Message::TextBackspace),
            KeyCode::Delete => Some(Message::TextDelete),
            KeyCode::Up => Some(Message::TextMove(Direction::Up)),
            KeyCode::Down => Some(Message::TextMove(Direction::Down)),
            KeyCode::Left => Some(Message::TextMove(Direction::Left)),
            KeyCode::Right => Some(Message::TextMove(Direction::Right)),
            KeyCode::Home => Some(Message::TextHome),
            KeyCode::End => Some(Message::TextEnd),
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                Some(Message::TextInput(c))
            }
            _ => None,
        }
    }

    pub(super) fn view(model: &Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}

fn pen_for_digit(c: char) -> Option<Ink> {
    c.to_digit(10).and_then(|d| Ink::from_value(u64::from(d)))
}
