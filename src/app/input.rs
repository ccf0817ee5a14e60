//! Draft buffers for the contact form fields.
//!
//! A draft is what the visitor is typing, cursor included. The value the
//! form stores is the sanitized draft; see [`crate::contact::ContactForm`].

use crate::contact::Field;

/// Editable text with a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    /// Buffer contents
    pub buffer: String,

    /// Cursor position within `buffer` (byte offset)
    pub cursor: usize,
}

impl TextInput {
    /// Create an empty input
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
        }
    }

    /// Clear the buffer and reset the cursor
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Delete the previous word (like many shell/readline editors).
    ///
    /// This removes any whitespace immediately before the cursor, then removes
    /// the contiguous non-whitespace "word" segment.
    pub fn delete_word(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let mut start = self.cursor;
        let mut found_non_whitespace = false;

        for (index, ch) in self.buffer[..self.cursor].char_indices().rev() {
            if !found_non_whitespace {
                start = index;
                if !ch.is_whitespace() {
                    found_non_whitespace = true;
                }
                continue;
            }

            if ch.is_whitespace() {
                start = index.saturating_add(ch.len_utf8());
                break;
            }

            start = index;
        }

        self.buffer.drain(start..self.cursor);
        self.cursor = start;
    }

    /// Insert a character at the cursor position
    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor (backspace)
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev_char_boundary = self.buffer[..self.cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
            self.buffer.remove(prev_char_boundary);
            self.cursor = prev_char_boundary;
        }
    }

    /// Delete the character at the cursor (delete key)
    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    /// Move cursor left by one character
    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.buffer[..self.cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move cursor right by one character
    pub fn cursor_right(&mut self) {
        if self.cursor < self.buffer.len() {
            self.cursor = self.buffer[self.cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.buffer.len(), |(i, _)| self.cursor + i);
        }
    }

    /// Move cursor to start of current line
    pub fn cursor_home(&mut self) {
        let text = &self.buffer[..self.cursor];
        self.cursor = text.rfind('\n').map_or(0, |i| i + 1);
    }

    /// Move cursor to end of current line
    pub fn cursor_end(&mut self) {
        let text = &self.buffer[self.cursor..];
        self.cursor += text.find('\n').unwrap_or(text.len());
    }
}

/// One draft per contact field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Drafts {
    name: TextInput,
    email: TextInput,
    message: TextInput,
}

impl Drafts {
    /// Draft for `field`.
    #[must_use]
    pub const fn get(&self, field: Field) -> &TextInput {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Mutable draft for `field`.
    pub const fn get_mut(&mut self, field: Field) -> &mut TextInput {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(text: &str, cursor: usize) -> TextInput {
        TextInput {
            buffer: text.to_string(),
            cursor,
        }
    }

    #[test]
    fn test_insert_char_middle() {
        let mut text = input("hllo", 1);
        text.insert_char('e');
        assert_eq!(text.buffer, "hello");
        assert_eq!(text.cursor, 2);
    }

    #[test]
    fn test_backspace_multibyte() {
        let mut text = input("café", "café".len());
        text.backspace();
        assert_eq!(text.buffer, "caf");
        assert_eq!(text.cursor, 3);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut text = input("abc", 0);
        text.backspace();
        assert_eq!(text.buffer, "abc");
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut text = input("abc", 1);
        text.delete();
        assert_eq!(text.buffer, "ac");
        text.cursor = 2;
        text.delete();
        assert_eq!(text.buffer, "ac");
    }

    #[test]
    fn test_cursor_movement_respects_char_boundaries() {
        let mut text = input("añb", 0);
        text.cursor_right();
        text.cursor_right();
        assert_eq!(text.cursor, 3);
        text.cursor_left();
        assert_eq!(text.cursor, 1);
    }

    #[test]
    fn test_home_end_follow_lines() {
        let mut text = input("first\nsecond", 8);
        text.cursor_home();
        assert_eq!(text.cursor, 6);
        text.cursor_end();
        assert_eq!(text.cursor, 12);
    }

    #[test]
    fn test_delete_word() {
        let mut text = input("hello big world  ", 17);
        text.delete_word();
        assert_eq!(text.buffer, "hello big ");
        text.delete_word();
        assert_eq!(text.buffer, "hello ");
    }

    #[test]
    fn test_drafts_are_independent() {
        let mut drafts = Drafts::default();
        drafts.get_mut(Field::Email).insert_char('x');
        assert_eq!(drafts.get(Field::Email).buffer, "x");
        assert!(drafts.get(Field::Name).buffer.is_empty());
    }
}
