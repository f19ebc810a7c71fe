//! Direct-draw combined renderer: the one path the REPL event loop calls on
//! every frame (Open Question 2 in the design notes). It composes
//! scrollback, an optional separator, and the input buffer directly, rather
//! than going through [`crate::cake::LayerCake`], because that is what the
//! original event loop actually does on every frame — the layer cake remains
//! available as a general-purpose compositing engine for callers that need
//! it (exercised independently in `cake.rs`'s own tests).

use ik_editor::layout::nth_row;
use ik_scrollback::Scrollback;
use std::fmt::Write as _;

const CLEAR_SCREEN: &str = "\x1b[2J";
const CURSOR_HOME: &str = "\x1b[H";
const HIDE_CURSOR: &str = "\x1b[?25l";
const SHOW_CURSOR: &str = "\x1b[?25h";

pub struct FrameRequest<'a> {
    pub scrollback: &'a Scrollback,
    pub first_physical_row: usize,
    pub visible_rows: usize,
    pub separator_visible: bool,
    pub input_text: &'a str,
    pub input_visible: bool,
    pub cursor_byte_offset: usize,
    pub width: usize,
}

/// Build one complete frame as terminal-ready bytes, per the frame-level
/// escape envelope in the external interfaces section: clear, hide, home,
/// body, then a cursor-visibility toggle and (if the input buffer is
/// visible) an absolute positioning escape.
pub fn compose_frame(req: &FrameRequest<'_>) -> String {
    let mut out = String::new();
    out.push_str(CLEAR_SCREEN);
    out.push_str(HIDE_CURSOR);
    out.push_str(CURSOR_HOME);

    let scrollback_rows = render_scrollback_slice(
        req.scrollback,
        req.first_physical_row,
        req.visible_rows.min(req.scrollback.total_physical_lines().saturating_sub(req.first_physical_row)),
    );
    out.push_str(&scrollback_rows);

    if req.separator_visible {
        for _ in 0..req.width {
            out.push('\u{2500}');
        }
        if req.input_visible {
            out.push_str("\r\n");
        }
    }

    if req.input_visible {
        out.push_str(&req.input_text.replace('\n', "\r\n"));
    }

    if req.input_visible {
        out.push_str(SHOW_CURSOR);
        let (row, col) = crate::cursor::screen_position(req.input_text, req.cursor_byte_offset, req.width)
            .unwrap_or((0, 0));
        let base_row = base_input_row(req);
        let _ = write!(out, "\x1b[{};{}H", base_row + row + 1, col + 1);
    } else {
        out.push_str(SHOW_CURSOR);
    }

    out
}

fn base_input_row(req: &FrameRequest<'_>) -> usize {
    let mut rows = req.visible_rows.min(
        req.scrollback
            .total_physical_lines()
            .saturating_sub(req.first_physical_row),
    );
    if req.separator_visible {
        rows += 1;
    }
    rows
}

/// Render physical rows `[first, first+count)` of the scrollback, clearing
/// to end-of-line and emitting CRLF after every row, including the last.
fn render_scrollback_slice(scrollback: &Scrollback, first: usize, count: usize) -> String {
    let mut out = String::new();
    if count == 0 {
        return out;
    }
    let mut remaining = count;
    let mut row = first;

    let width = scrollback.cached_width();
    while remaining > 0 {
        let Ok((line_index, row_in_line)) = scrollback.find_logical_line_at_physical_row(row) else {
            break;
        };
        let text = scrollback.line_text(line_index).unwrap_or("");
        let segment = nth_row(text, width, row_in_line).unwrap_or("");
        out.push_str(segment);
        out.push_str("\x1b[K\r\n");

        row += 1;
        remaining -= 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_editor_empty_scrollback_frame() {
        let sb = Scrollback::new(40);
        let req = FrameRequest {
            scrollback: &sb,
            first_physical_row: 0,
            visible_rows: 10,
            separator_visible: false,
            input_text: "",
            input_visible: true,
            cursor_byte_offset: 0,
            width: 40,
        };
        let frame = compose_frame(&req);
        assert!(frame.starts_with("\x1b[2J\x1b[?25l\x1b[H"));
        assert!(frame.ends_with("\x1b[?25h\x1b[1;1H"));
    }

    #[test]
    fn insert_hi_positions_cursor_after_it() {
        let sb = Scrollback::new(40);
        let req = FrameRequest {
            scrollback: &sb,
            first_physical_row: 0,
            visible_rows: 10,
            separator_visible: false,
            input_text: "Hi",
            input_visible: true,
            cursor_byte_offset: 2,
            width: 40,
        };
        let frame = compose_frame(&req);
        assert!(frame.contains("Hi"));
        assert!(frame.ends_with("\x1b[?25h\x1b[1;3H"));
    }

    #[test]
    fn multi_segment_scrollback_line_renders_each_segment_with_clear_to_eol() {
        let mut sb = Scrollback::new(80);
        sb.append_line("Line1\nLine2\nLine3");
        let body = render_scrollback_slice(&sb, 1, 2);
        assert_eq!(body, "Line2\x1b[K\r\nLine3\x1b[K\r\n");
    }

    #[test]
    fn wrapped_single_segment_with_no_embedded_lf_renders_each_wrapped_row() {
        let mut sb = Scrollback::new(10);
        sb.append_line("AAAAAAAAAABBBBBBBBBB");
        assert_eq!(sb.total_physical_lines(), 2);
        let body = render_scrollback_slice(&sb, 1, 1);
        assert_eq!(body, "BBBBBBBBBB\x1b[K\r\n");
    }
}
