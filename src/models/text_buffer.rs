//! Text buffer model
//!
//! - text storage (Rope)
//! - cursor and selection as char offsets
//! - unsaved-edit tracking since the last full replace

use super::selection::Selection;
use crate::kernel::services::ports::TextSurface;
use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;

/// Borrow the slice as `&str` when it is contiguous, copy otherwise.
fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

#[derive(Debug, Clone)]
pub struct TextBuffer {
    rope: Rope,
    cursor: usize,
    selection: Option<Selection>,
    modified: bool,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            cursor: 0,
            selection: None,
            modified: false,
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            ..Self::new()
        }
    }

    fn remove_selection(&mut self) -> bool {
        let Some(selection) = self.selection.take() else {
            return false;
        };
        if selection.is_empty() {
            return false;
        }

        let (start, end) = selection.range();
        self.rope.remove(start..end);
        self.cursor = start;
        true
    }

    /// Char length of the grapheme cluster that ends at the cursor.
    fn grapheme_len_before_cursor(&self) -> usize {
        let row = self.rope.char_to_line(self.cursor);
        let line_start = self.rope.line_to_char(row);
        if line_start == self.cursor {
            // Joining with the previous line removes its whole line break.
            let crlf = self.cursor >= 2
                && self.rope.char(self.cursor - 2) == '\r'
                && self.rope.char(self.cursor - 1) == '\n';
            return if crlf { 2 } else { 1 };
        }

        let prefix = slice_to_cow(self.rope.slice(line_start..self.cursor));
        prefix
            .graphemes(true)
            .next_back()
            .map(|g| g.chars().count())
            .unwrap_or(1)
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSurface for TextBuffer {
    fn text(&self) -> String {
        self.rope.to_string()
    }

    fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.cursor = 0;
        self.selection = None;
        self.modified = false;
    }

    fn cursor_position(&self) -> usize {
        self.cursor
    }

    fn set_cursor_position(&mut self, pos: usize) {
        self.cursor = pos.min(self.rope.len_chars());
        self.selection = None;
    }

    fn selection(&self) -> Option<(usize, usize)> {
        self.selection.filter(|s| !s.is_empty()).map(|s| s.range())
    }

    fn set_selection(&mut self, start: usize, end: usize) {
        let len = self.rope.len_chars();
        let start = start.min(len);
        let end = end.min(len);
        self.selection = Some(Selection::new(start, end));
        self.cursor = end;
    }

    fn insert_text(&mut self, text: &str) {
        let removed = self.remove_selection();
        if text.is_empty() {
            self.modified |= removed;
            return;
        }

        self.rope.insert(self.cursor, text);
        self.cursor += text.chars().count();
        self.modified = true;
    }

    fn delete_backward(&mut self) -> bool {
        if self.remove_selection() {
            self.modified = true;
            return true;
        }
        if self.cursor == 0 {
            return false;
        }

        let len = self.grapheme_len_before_cursor();
        let start = self.cursor - len;
        self.rope.remove(start..self.cursor);
        self.cursor = start;
        self.modified = true;
        true
    }

    fn is_modified(&self) -> bool {
        self.modified
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
