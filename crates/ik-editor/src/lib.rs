//! Input editor: a byte buffer of edited text paired with a dual
//! byte/grapheme cursor, grapheme-cluster movement, and width-dependent
//! physical-row layout for vertical navigation and wrapped rendering.

pub mod layout;

use ik_text::grapheme;
use layout::PhysicalRow;

/// Cursor position expressed in both coordinates the rest of the workspace
/// needs: byte offset for slicing/insertion, grapheme offset for cursor
/// arithmetic that must not split a cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub byte_offset: usize,
    pub grapheme_offset: usize,
}

/// A single-buffer text editor with grapheme-aware cursor movement.
#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    text: String,
    cursor: Cursor,
    /// Sticky display column for consecutive vertical moves; cleared by any
    /// explicit horizontal navigation (insert, delete, left/right, set).
    target_column: Option<usize>,
    cached_width: usize,
    cached_rows: Vec<PhysicalRow>,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Reset to an empty buffer, as happens on line submission.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = Cursor::default();
        self.target_column = None;
        self.cached_rows.clear();
        self.cached_width = 0;
    }

    fn invalidate_layout(&mut self) {
        self.cached_width = 0;
    }

    /// Insert a single code point at the cursor, advancing it by the
    /// inserted byte length and by one grapheme boundary (a newline is its
    /// own cluster, like every other inserted code point here).
    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor.byte_offset, c);
        self.cursor.byte_offset += c.len_utf8();
        self.cursor.grapheme_offset += 1;
        self.target_column = None;
        self.invalidate_layout();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Remove the grapheme cluster ending at the cursor (backspace). No-op
    /// at the start of the buffer.
    pub fn backspace(&mut self) {
        if self.cursor.byte_offset == 0 {
            return;
        }
        let prev = grapheme::prev_boundary(&self.text, self.cursor.byte_offset);
        self.text.replace_range(prev..self.cursor.byte_offset, "");
        self.cursor.byte_offset = prev;
        self.cursor.grapheme_offset = self.cursor.grapheme_offset.saturating_sub(1);
        self.target_column = None;
        self.invalidate_layout();
    }

    /// Remove the grapheme cluster starting at the cursor (forward delete).
    /// No-op at the end of the buffer. Grapheme offset is unchanged, since
    /// the cursor does not move.
    pub fn delete_forward(&mut self) {
        if self.cursor.byte_offset >= self.text.len() {
            return;
        }
        let next = grapheme::next_boundary(&self.text, self.cursor.byte_offset);
        self.text.replace_range(self.cursor.byte_offset..next, "");
        self.target_column = None;
        self.invalidate_layout();
    }

    pub fn move_left(&mut self) {
        if self.cursor.byte_offset == 0 {
            return;
        }
        self.cursor.byte_offset = grapheme::prev_boundary(&self.text, self.cursor.byte_offset);
        self.cursor.grapheme_offset = self.cursor.grapheme_offset.saturating_sub(1);
        self.target_column = None;
    }

    pub fn move_right(&mut self) {
        if self.cursor.byte_offset >= self.text.len() {
            return;
        }
        self.cursor.byte_offset = grapheme::next_boundary(&self.text, self.cursor.byte_offset);
        self.cursor.grapheme_offset += 1;
        self.target_column = None;
    }

    /// Set the cursor to an exact byte offset, recounting the grapheme
    /// offset from the start of the buffer.
    pub fn set_position(&mut self, byte_offset: usize) {
        let byte_offset = byte_offset.min(self.text.len());
        self.cursor.byte_offset = byte_offset;
        self.cursor.grapheme_offset = grapheme::count_to(&self.text, byte_offset);
        self.target_column = None;
    }

    fn ensure_layout(&mut self, width: usize) {
        let width = width.max(1);
        if self.cached_width == width && !self.cached_rows.is_empty() {
            return;
        }
        self.cached_rows = layout::physical_rows(&self.text, width);
        self.cached_width = width;
    }

    /// Total wrapped physical row count at `width` (at least 1).
    pub fn physical_row_count(&mut self, width: usize) -> usize {
        self.ensure_layout(width);
        self.cached_rows.len()
    }

    fn move_vertical(&mut self, width: usize, delta: isize) {
        self.ensure_layout(width);
        let rows = self.cached_rows.clone();
        let current_row_idx = layout::row_at_byte(&rows, self.cursor.byte_offset);
        let current_row = rows[current_row_idx];
        let target_column = *self.target_column.get_or_insert_with(|| {
            layout::column_in_row(&self.text, current_row, self.cursor.byte_offset)
        });

        let target_idx = current_row_idx as isize + delta;
        if target_idx < 0 || target_idx as usize >= rows.len() {
            return;
        }
        let target_row = rows[target_idx as usize];
        let new_byte = layout::byte_at_column(&self.text, target_row, target_column);
        self.cursor.byte_offset = new_byte;
        self.cursor.grapheme_offset = grapheme::count_to(&self.text, new_byte);
    }

    pub fn move_up(&mut self, width: usize) {
        self.move_vertical(width, -1);
    }

    pub fn move_down(&mut self, width: usize) {
        self.move_vertical(width, 1);
    }
}
