//! Input field handling for the terminal user interface.

/// A single-line text input field with cursor position management.
///
/// The cursor is a character index; edits convert it to a byte offset so
/// multibyte input never splits a UTF-8 boundary.
#[derive(Clone, Default)]
pub struct InputField {
    pub value: String,
    pub cursor: usize,
}

impl InputField {
    /// Create a new empty input field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a character at the current cursor position.
    pub fn handle_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn handle_backspace(&mut self) {
        if self.cursor > 0 {
            let at = self.byte_offset(self.cursor - 1);
            self.value.remove(at);
            self.cursor -= 1;
        }
    }

    /// Delete the character at the cursor position.
    pub fn handle_delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    /// Move cursor one position to the left.
    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor one position to the right.
    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map_or(self.value.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_at_cursor() {
        let mut field = InputField::new();
        for c in "abd".chars() {
            field.handle_char(c);
        }
        field.move_cursor_left();
        field.handle_char('c');
        assert_eq!(field.value, "abcd");
        assert_eq!(field.cursor, 3);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut field = InputField::new();
        for c in "abc".chars() {
            field.handle_char(c);
        }
        field.handle_backspace();
        assert_eq!(field.value, "ab");
        field.move_cursor_left();
        field.move_cursor_left();
        field.handle_delete();
        assert_eq!(field.value, "b");
        assert_eq!(field.cursor, 0);
    }

    #[test]
    fn test_multibyte_input_keeps_boundaries() {
        let mut field = InputField::new();
        field.handle_char('é');
        field.handle_char('x');
        field.move_cursor_left();
        field.handle_char('t');
        assert_eq!(field.value, "étx");
        field.handle_backspace();
        assert_eq!(field.value, "éx");
        assert_eq!(field.cursor, 1);
    }
}
