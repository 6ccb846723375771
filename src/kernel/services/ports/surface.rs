//! Editable text surface the code area reads and writes.
//!
//! Positions are char offsets into the whole text.

pub trait TextSurface {
    fn text(&self) -> String;

    /// Replaces the whole text, moves the cursor to the start and clears the
    /// surface's unsaved-edit state.
    fn set_text(&mut self, text: &str);

    fn cursor_position(&self) -> usize;

    fn set_cursor_position(&mut self, pos: usize);

    /// Selected range as `(start, end)` with `start <= end`.
    fn selection(&self) -> Option<(usize, usize)>;

    /// Selects `start..end` and leaves the cursor at `end`.
    fn set_selection(&mut self, start: usize, end: usize);

    /// Inserts at the cursor, replacing the selection if there is one.
    fn insert_text(&mut self, text: &str);

    /// Removes the selection, or the grapheme before the cursor.
    fn delete_backward(&mut self) -> bool;

    /// Whether the text was edited since the last `set_text`.
    fn is_modified(&self) -> bool;
}
