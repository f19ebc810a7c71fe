//! Cursor screen position simulation: given text, a byte offset into it, and
//! a terminal width, compute the `(row, col)` the cursor would land at after
//! rendering that prefix.

use crate::layer::RenderError;
use ik_text::csi::skip_csi;
use ik_text::width::char_width;

/// Zero-based `(row, col)`.
pub fn screen_position(text: &str, byte_offset: usize, width: usize) -> Result<(usize, usize), RenderError> {
    if byte_offset > text.len() || !text.is_char_boundary(byte_offset) {
        return Err(RenderError::InvalidArg(format!(
            "byte_offset {byte_offset} is not a char boundary of the given text"
        )));
    }
    let width = width.max(1);
    let bytes = text.as_bytes();
    let mut pos = 0usize;
    let mut row = 0usize;
    let mut col = 0usize;

    while pos < byte_offset {
        let skip = skip_csi(bytes, pos);
        if skip > 0 {
            pos += skip;
            continue;
        }
        let ch = text[pos..].chars().next().expect("pos is a char boundary");
        if ch == '\n' {
            row += 1;
            col = 0;
            pos += 1;
            continue;
        }
        let w = char_width(ch) as usize;
        if col + w > width {
            row += 1;
            col = 0;
        }
        col += w;
        pos += ch.len_utf8();
    }

    if col == width {
        row += 1;
        col = 0;
    }

    Ok((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_at_start_is_origin() {
        assert_eq!(screen_position("hello", 0, 80).unwrap(), (0, 0));
    }

    #[test]
    fn cursor_advances_by_width() {
        assert_eq!(screen_position("hello", 3, 80).unwrap(), (0, 3));
    }

    #[test]
    fn newline_moves_to_next_row() {
        assert_eq!(screen_position("ab\ncd", 4, 80).unwrap(), (1, 1));
    }

    #[test]
    fn wraps_at_width() {
        // width 3: "abc" fills row 0 exactly, 'd' wraps to row 1 col 0.
        assert_eq!(screen_position("abcd", 4, 3).unwrap(), (1, 1));
    }

    #[test]
    fn column_exactly_at_width_wraps_to_next_row() {
        assert_eq!(screen_position("abc", 3, 3).unwrap(), (1, 0));
    }

    #[test]
    fn csi_sequences_consume_no_columns() {
        let text = "\x1b[31mhi";
        assert_eq!(screen_position(text, text.len(), 80).unwrap(), (0, 2));
    }

    #[test]
    fn non_char_boundary_is_invalid_arg() {
        let text = "héllo"; // 'é' is 2 bytes
        assert!(screen_position(text, 2, 80).is_err());
    }
}
