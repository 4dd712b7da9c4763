//! Single-line input box
//!
//! The cursor is a char index, so multi-byte input edits cleanly.

/// Editable input line
#[derive(Debug, Clone, Default)]
pub struct InputBox {
    /// Current input text
    text: String,
    /// Cursor position, in chars
    cursor: usize,
}

impl InputBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text left of the cursor
    pub fn before_cursor(&self) -> &str {
        &self.text[..self.byte_index()]
    }

    pub fn insert(&mut self, c: char) {
        let index = self.byte_index();
        self.text.insert(index, c);
        self.cursor += 1;
    }

    /// Delete the char left of the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let index = self.byte_index();
        self.text.remove(index);
    }

    /// Delete the char under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let index = self.byte_index();
            self.text.remove(index);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    /// Clear the box and return its trimmed contents, or `None` if blank.
    /// Blank input is left in place.
    pub fn submit(&mut self) -> Option<String> {
        let value = self.text.trim();
        if value.is_empty() {
            return None;
        }
        let value = value.to_string();
        self.text.clear();
        self.cursor = 0;
        Some(value)
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.text
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}
