//! Append-only scrollback: a packed byte buffer of logical lines plus
//! parallel offset/length arrays and a width-dependent physical-row layout
//! cache.
//!
//! The packed buffer holds no NUL separators between lines — that
//! convention exists in the C original purely so a line can be handed to
//! `printf("%s", ...)` in isolation; Rust string slices already carry their
//! own length, so `offsets`/`lengths` are sufficient and the buffer is a
//! plain `String` grown by simple concatenation.

pub mod layout;

use ik_text::csi::skip_csi;
use ik_text::width::char_width;
use layout::LineLayout;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScrollbackError {
    #[error("index {index} out of range (count={count})")]
    OutOfRange { index: usize, count: usize },
}

/// An append-only log of logical lines with cached physical-row layout.
#[derive(Debug, Clone)]
pub struct Scrollback {
    text_buffer: String,
    offsets: Vec<usize>,
    lengths: Vec<usize>,
    layouts: Vec<LineLayout>,
    cached_width: usize,
    total_physical_lines: usize,
}

impl Scrollback {
    pub fn new(terminal_width: usize) -> Self {
        Self {
            text_buffer: String::new(),
            offsets: Vec::new(),
            lengths: Vec::new(),
            layouts: Vec::new(),
            cached_width: terminal_width.max(1),
            total_physical_lines: 0,
        }
    }

    pub fn count(&self) -> usize {
        self.offsets.len()
    }

    pub fn total_physical_lines(&self) -> usize {
        self.total_physical_lines
    }

    pub fn cached_width(&self) -> usize {
        self.cached_width
    }

    /// Append a logical line, computing its layout at the current cached
    /// width. Returns the new line's index.
    pub fn append_line(&mut self, text: &str) -> usize {
        let offset = self.text_buffer.len();
        self.text_buffer.push_str(text);
        self.offsets.push(offset);
        self.lengths.push(text.len());

        let layout = layout::compute_layout(text, self.cached_width);
        self.total_physical_lines += layout.physical_lines;
        self.layouts.push(layout);

        self.offsets.len() - 1
    }

    /// Recompute every line's physical row count for `width`, in pure
    /// arithmetic over the cached per-segment widths. No-op if `width`
    /// equals the cached width.
    pub fn ensure_layout(&mut self, width: usize) {
        let width = width.max(1);
        if width == self.cached_width {
            return;
        }
        let mut total = 0usize;
        for layout in &mut self.layouts {
            layout.physical_lines = layout::recompute_physical_lines(layout, width);
            total += layout.physical_lines;
        }
        self.cached_width = width;
        self.total_physical_lines = total;
    }

    pub fn line_text(&self, index: usize) -> Result<&str, ScrollbackError> {
        let offset = *self
            .offsets
            .get(index)
            .ok_or(ScrollbackError::OutOfRange { index, count: self.count() })?;
        let len = self.lengths[index];
        Ok(&self.text_buffer[offset..offset + len])
    }

    pub fn line_physical_lines(&self, index: usize) -> Result<usize, ScrollbackError> {
        self.layouts
            .get(index)
            .map(|l| l.physical_lines)
            .ok_or(ScrollbackError::OutOfRange { index, count: self.count() })
    }

    /// Locate the logical line and in-line row offset containing physical
    /// row `row` across the whole scrollback.
    pub fn find_logical_line_at_physical_row(
        &self,
        row: usize,
    ) -> Result<(usize, usize), ScrollbackError> {
        if row >= self.total_physical_lines {
            return Err(ScrollbackError::OutOfRange {
                index: row,
                count: self.total_physical_lines,
            });
        }
        let mut current_row = 0usize;
        for (i, layout) in self.layouts.iter().enumerate() {
            if row < current_row + layout.physical_lines {
                return Ok((i, row - current_row));
            }
            current_row += layout.physical_lines;
        }
        Err(ScrollbackError::OutOfRange {
            index: row,
            count: self.total_physical_lines,
        })
    }

    /// Byte offset within logical line `line_index` at which the
    /// accumulated display column reaches `display_col`, skipping CSI
    /// sequences and any that immediately precede the resulting byte.
    pub fn byte_offset_at_display_col(
        &self,
        line_index: usize,
        display_col: usize,
    ) -> Result<usize, ScrollbackError> {
        let text = self.line_text(line_index)?;
        if display_col == 0 {
            return Ok(0);
        }
        let bytes = text.as_bytes();
        let mut pos = 0usize;
        let mut col = 0usize;
        while pos < bytes.len() && col < display_col {
            let skip = skip_csi(bytes, pos);
            if skip > 0 {
                pos += skip;
                continue;
            }
            let ch = text[pos..].chars().next().expect("pos is a char boundary");
            if ch == '\n' {
                pos += 1;
                continue;
            }
            col += char_width(ch) as usize;
            pos += ch.len_utf8();
        }
        // Consume any CSI sequences sitting right before the target byte so
        // the result never points inside an escape.
        while pos < bytes.len() {
            let skip = skip_csi(bytes, pos);
            if skip > 0 {
                pos += skip;
            } else {
                break;
            }
        }
        Ok(pos)
    }

    pub fn clear(&mut self) {
        self.text_buffer.clear();
        self.offsets.clear();
        self.lengths.clear();
        self.layouts.clear();
        self.total_physical_lines = 0;
    }
}

/// Trim trailing whitespace (space, tab, LF, CR) from `text`.
pub fn trim_trailing(text: &str) -> &str {
    text.trim_end_matches([' ', '\t', '\n', '\r'])
}

/// Format a warning line with its category prefix and, if colors are
/// enabled and the category has one, a 256-color foreground sequence.
pub fn format_warning(text: &str, colors_enabled: bool) -> String {
    use ik_text::output_style::{ANSI_RESET, OutputCategory};

    let prefix = OutputCategory::Warning.prefix().unwrap_or("");
    match OutputCategory::Warning.color() {
        Some(color) if colors_enabled => {
            format!("{}{prefix} {text}{ANSI_RESET}", ik_text::fg_256(color))
        }
        _ => format!("{prefix} {text}"),
    }
}
