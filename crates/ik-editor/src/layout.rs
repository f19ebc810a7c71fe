//! Width-dependent physical-row wrapping for a single editable string.
//!
//! Shares its wrapping arithmetic with the scrollback's per-logical-line
//! layout cache (`ik-scrollback::layout`): a string is split into segments
//! at embedded LFs, and each segment wraps every `width` display columns
//! into its own physical row.

use ik_text::csi::skip_csi;
use ik_text::width::char_width;

/// One wrapped physical row: a half-open byte range into the source text.
/// `end` never includes the LF that closed the segment (if any); a row
/// produced by mid-segment wrapping has no terminator at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalRow {
    pub start: usize,
    pub end: usize,
}

/// Wrap `text` into physical rows at `width` columns, honoring embedded LFs
/// as segment breaks. Always returns at least one row (an empty string
/// yields a single empty row, matching the "blank editor still reserves
/// cursor space" requirement).
pub fn physical_rows(text: &str, width: usize) -> Vec<PhysicalRow> {
    let width = width.max(1);
    let bytes = text.as_bytes();
    let mut rows = Vec::new();
    let mut row_start = 0usize;
    let mut col = 0usize;
    let mut pos = 0usize;

    while pos < bytes.len() {
        if bytes[pos] == b'\n' {
            rows.push(PhysicalRow {
                start: row_start,
                end: pos,
            });
            pos += 1;
            row_start = pos;
            col = 0;
            continue;
        }
        let skip = skip_csi(bytes, pos);
        if skip > 0 {
            pos += skip;
            continue;
        }
        let ch = text[pos..].chars().next().expect("pos is a char boundary");
        let w = char_width(ch) as usize;
        if col + w > width && pos > row_start {
            rows.push(PhysicalRow {
                start: row_start,
                end: pos,
            });
            row_start = pos;
            col = 0;
        }
        col += w;
        pos += ch.len_utf8();
    }
    rows.push(PhysicalRow {
        start: row_start,
        end: bytes.len(),
    });
    rows
}

/// Text of the `idx`-th physical row of `text` wrapped at `width`, or
/// `None` if `idx` is out of range. Shared by every render path that needs
/// to emit one wrapped row at a time instead of an LF-delimited segment.
pub fn nth_row(text: &str, width: usize, idx: usize) -> Option<&str> {
    physical_rows(text, width).get(idx).map(|row| &text[row.start..row.end])
}

/// Display column of `byte` within its physical row, given the row it falls in.
pub fn column_in_row(text: &str, row: PhysicalRow, byte: usize) -> usize {
    let end = byte.min(row.end).max(row.start);
    ik_text::width::str_width(&text[row.start..end])
}

/// Find the index of the physical row containing byte offset `byte`.
pub fn row_at_byte(rows: &[PhysicalRow], byte: usize) -> usize {
    for (idx, row) in rows.iter().enumerate() {
        if byte < row.end || idx == rows.len() - 1 {
            return idx;
        }
    }
    rows.len().saturating_sub(1)
}

/// Byte offset within `row` at or before which the accumulated display
/// column reaches `target_column`, skipping CSI sequences. Stops at the
/// row's end if `target_column` is never reached.
pub fn byte_at_column(text: &str, row: PhysicalRow, target_column: usize) -> usize {
    let bytes = text.as_bytes();
    let mut pos = row.start;
    let mut col = 0usize;
    while pos < row.end {
        let skip = skip_csi(bytes, pos);
        if skip > 0 {
            pos += skip;
            continue;
        }
        if col >= target_column {
            return pos;
        }
        let ch = text[pos..].chars().next().expect("pos is a char boundary");
        col += char_width(ch) as usize;
        pos += ch.len_utf8();
    }
    row.end
}
