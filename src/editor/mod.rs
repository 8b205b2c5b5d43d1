//! Editable text areas for the palette and grid encodings.
//!
//! [`TextBuffer`] is a small rope-backed buffer with a cursor.
//! [`TextField`] wraps one and remembers whether the user has typed
//! into it since the text was last regenerated from the canvas.

mod buffer;

pub use buffer::{Cursor, Direction, TextBuffer};

/// A text area whose content is derived from canvas state but can be
/// edited and committed back.
#[derive(Debug, Clone)]
pub struct TextField {
    buffer: TextBuffer,
    edited: bool,
}

impl TextField {
    pub fn new(text: &str) -> Self {
        Self {
            buffer: TextBuffer::from_text(text),
            edited: false,
        }
    }

    pub const fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Mutable access for editing; marks the field as edited.
    pub const fn edit(&mut self) -> &mut TextBuffer {
        self.edited = true;
        &mut self.buffer
    }

    /// Backspace; only a real deletion counts as an edit.
    pub fn delete_back(&mut self) {
        if self.buffer.delete_back() {
            self.edited = true;
        }
    }

    /// Delete; only a real deletion counts as an edit.
    pub fn delete_forward(&mut self) {
        if self.buffer.delete_forward() {
            self.edited = true;
        }
    }

    /// Cursor-only access that does not count as an edit.
    pub const fn navigate(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    /// Whether the text holds user edits not yet applied to the canvas.
    pub const fn is_edited(&self) -> bool {
        self.edited
    }

    /// Replace the text with freshly serialized state, dropping any edits.
    pub fn regenerate(&mut self, text: &str) {
        self.buffer.replace(text);
        self.edited = false;
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_clean() {
        let field = TextField::new("[1]");
        assert!(!field.is_edited());
        assert_eq!(field.text(), "[1]");
    }

    #[test]
    fn test_edit_marks_field() {
        let mut field = TextField::new("[1]");
        field.edit().move_to_end();
        field.edit().insert_char('x');
        assert!(field.is_edited());
        assert_eq!(field.text(), "[1]x");
    }

    #[test]
    fn test_navigate_does_not_mark_field() {
        let mut field = TextField::new("[1]");
        field.navigate().move_cursor(Direction::Right);
        assert!(!field.is_edited());
        assert_eq!(field.buffer().cursor().col, 1);
    }

    #[test]
    fn test_noop_delete_is_not_an_edit() {
        let mut field = TextField::new("[1]");
        field.delete_back();
        assert!(!field.is_edited());
        field.navigate().move_to_end();
        field.delete_forward();
        assert!(!field.is_edited());
        field.delete_back();
        assert!(field.is_edited());
        assert_eq!(field.text(), "[1");
    }

    #[test]
    fn test_regenerate_clears_edits() {
        let mut field = TextField::new("[1]");
        field.edit().insert_char('x');
        field.regenerate("[2]");
        assert!(!field.is_edited());
        assert_eq!(field.text(), "[2]");
    }
}
