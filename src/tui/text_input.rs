use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::util::unicode;

/// What a key did to the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Not a key this field handles (or the field is read-only)
    Ignored,
    /// Only the cursor moved
    Moved,
    /// The value changed
    Changed,
    /// Enter
    Submit,
    /// Esc
    Cancel,
}

/// Single-line field. `cursor` is a byte offset on a grapheme boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    /// Byte offset, always on a grapheme boundary
    cursor: usize,
    editable: bool,
    focused: bool,
}

impl Default for TextInput {
    fn default() -> Self {
        TextInput::new("")
    }
}

impl TextInput {
    /// Editable, unfocused field with the cursor at the end
    pub fn new(value: &str) -> Self {
        TextInput {
            value: value.to_string(),
            cursor: value.len(),
            editable: true,
            focused: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cursor position in terminal cells from the start of the value
    pub fn cursor_col(&self) -> usize {
        unicode::byte_offset_to_display_col(&self.value, self.cursor)
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Take input focus. Returns false when it was already held.
    pub fn focus(&mut self) -> bool {
        !std::mem::replace(&mut self.focused, true)
    }

    /// Drop input focus. Returns false when it was not held.
    pub fn blur(&mut self) -> bool {
        std::mem::replace(&mut self.focused, false)
    }

    /// Replace the value and park the cursor at its end
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Insert pasted text at the cursor. Line breaks and tabs become spaces.
    pub fn insert_str(&mut self, text: &str) -> InputOutcome {
        if !self.editable || text.is_empty() {
            return InputOutcome::Ignored;
        }
        let clean: String = text
            .chars()
            .filter(|c| *c != '\r')
            .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
            .collect();
        self.value.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
        InputOutcome::Changed
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> InputOutcome {
        match key.code {
            KeyCode::Enter => return InputOutcome::Submit,
            KeyCode::Esc => return InputOutcome::Cancel,
            _ => {}
        }
        if !self.editable {
            return InputOutcome::Ignored;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Home => self.move_to(0),
            KeyCode::End => self.move_to(self.value.len()),
            KeyCode::Char('a') if ctrl => self.move_to(0),
            KeyCode::Char('e') if ctrl => self.move_to(self.value.len()),
            // Kill to start of line
            KeyCode::Char('u') if ctrl => self.delete_range(0, self.cursor),
            // Delete word left
            KeyCode::Char('w') if ctrl => {
                let start = unicode::word_boundary_left(&self.value, self.cursor);
                self.delete_range(start, self.cursor)
            }
            KeyCode::Backspace if alt => {
                let start = unicode::word_boundary_left(&self.value, self.cursor);
                self.delete_range(start, self.cursor)
            }
            KeyCode::Backspace => match unicode::prev_grapheme_boundary(&self.value, self.cursor) {
                Some(prev) => self.delete_range(prev, self.cursor),
                None => InputOutcome::Ignored,
            },
            KeyCode::Delete => match unicode::next_grapheme_boundary(&self.value, self.cursor) {
                Some(next) => self.delete_range(self.cursor, next),
                None => InputOutcome::Ignored,
            },
            KeyCode::Left => match unicode::prev_grapheme_boundary(&self.value, self.cursor) {
                Some(prev) => self.move_to(prev),
                None => InputOutcome::Ignored,
            },
            KeyCode::Right => match unicode::next_grapheme_boundary(&self.value, self.cursor) {
                Some(next) => self.move_to(next),
                None => InputOutcome::Ignored,
            },
            KeyCode::Char(c) if !ctrl && !alt => {
                self.value.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                InputOutcome::Changed
            }
            _ => InputOutcome::Ignored,
        }
    }

    fn move_to(&mut self, offset: usize) -> InputOutcome {
        if offset == self.cursor {
            return InputOutcome::Ignored;
        }
        self.cursor = offset;
        InputOutcome::Moved
    }

    fn delete_range(&mut self, start: usize, end: usize) -> InputOutcome {
        if start >= end {
            return InputOutcome::Ignored;
        }
        self.value.drain(start..end);
        self.cursor = start;
        InputOutcome::Changed
    }
}
