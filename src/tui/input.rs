//! Input field handling for the terminal user interface.

/// A single-line text input with cursor position and active state.
///
/// The cursor is a byte offset into `value`, always kept on a char boundary
/// so multi-byte input cannot split a character.
#[derive(Clone)]
pub struct InputField {
    pub value: String,
    pub cursor: usize,
    pub active: bool,
}

impl InputField {
    /// Create a new empty input field.
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            active: false,
        }
    }

    /// Create an input field with initial text value.
    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.len(),
            active: false,
        }
    }

    /// Replace the content, moving the cursor to the end.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.value.len();
    }

    /// Insert a character at the current cursor position.
    pub fn handle_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor.
    pub fn handle_backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.value.remove(prev);
            self.cursor = prev;
        }
    }

    /// Delete the character at the cursor position.
    pub fn handle_delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    /// Move cursor one character to the left.
    pub fn move_cursor_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    /// Move cursor one character to the right.
    pub fn move_cursor_right(&mut self) {
        if let Some(ch) = self.value[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    /// Cursor position in characters, for terminal cursor placement.
    pub fn cursor_column(&self) -> usize {
        self.value[..self.cursor].chars().count()
    }

    fn prev_boundary(&self) -> Option<usize> {
        let ch = self.value[..self.cursor].chars().next_back()?;
        Some(self.cursor - ch.len_utf8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut field = InputField::new();
        field.handle_char('h');
        field.handle_char('i');
        assert_eq!(field.value, "hi");
        field.handle_backspace();
        assert_eq!(field.value, "h");
        assert_eq!(field.cursor, 1);
    }

    #[test]
    fn test_multibyte_input_keeps_boundaries() {
        let mut field = InputField::new();
        field.handle_char('é');
        field.handle_char('x');
        assert_eq!(field.value, "éx");
        field.move_cursor_left();
        field.move_cursor_left();
        assert_eq!(field.cursor, 0);
        assert_eq!(field.cursor_column(), 0);
        field.move_cursor_right();
        field.handle_backspace();
        assert_eq!(field.value, "x");
    }

    #[test]
    fn test_mid_value_insert_and_delete() {
        let mut field = InputField::with_value("ac");
        field.move_cursor_left();
        field.handle_char('b');
        assert_eq!(field.value, "abc");
        field.handle_delete();
        assert_eq!(field.value, "ab");
    }
}
