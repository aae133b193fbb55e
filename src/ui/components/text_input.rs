//! Single-line text input shared by the upload and chat panes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input buffer with a cursor counted in characters, not bytes.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    buffer: String,
    cursor_position: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn is_blank(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor_position = 0;
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.buffer = value.into();
        self.cursor_position = self.buffer.chars().count();
    }

    fn byte_pos(&self, char_index: usize) -> usize {
        self.buffer
            .chars()
            .take(char_index)
            .map(|ch| ch.len_utf8())
            .sum()
    }

    pub fn insert(&mut self, c: char) {
        let byte_pos = self.byte_pos(self.cursor_position);
        self.buffer.insert(byte_pos, c);
        self.cursor_position += 1;
    }

    /// Apply an editing key. Returns false for keys that are not editing keys.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return false;
        }

        match key.code {
            KeyCode::Char(c) => {
                self.insert(c);
                true
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    let byte_pos = self.byte_pos(self.cursor_position - 1);
                    self.buffer.remove(byte_pos);
                    self.cursor_position -= 1;
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor_position < self.buffer.chars().count() {
                    let byte_pos = self.byte_pos(self.cursor_position);
                    self.buffer.remove(byte_pos);
                }
                true
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(self.buffer.chars().count());
                true
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                true
            }
            KeyCode::End => {
                self.cursor_position = self.buffer.chars().count();
                true
            }
            _ => false,
        }
    }
}
