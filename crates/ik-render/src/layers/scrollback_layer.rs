//! The scrollback layer: a view over [`ik_scrollback::Scrollback`] for use
//! inside a [`crate::cake::LayerCake`]. The hot REPL render path uses
//! [`crate::direct::compose_frame`] instead; this layer exists so the cake
//! remains independently testable and usable by future callers.

use crate::layer::{Layer, RenderError};
use ik_editor::layout::nth_row;
use ik_scrollback::Scrollback;
use std::cell::RefCell;

pub struct ScrollbackLayer<'a> {
    scrollback: &'a RefCell<Scrollback>,
}

impl<'a> ScrollbackLayer<'a> {
    pub fn new(scrollback: &'a RefCell<Scrollback>) -> Self {
        Self { scrollback }
    }
}

impl Layer for ScrollbackLayer<'_> {
    fn is_visible(&self) -> bool {
        true
    }

    fn get_height(&self, width: usize) -> usize {
        let mut sb = self.scrollback.borrow_mut();
        sb.ensure_layout(width);
        sb.total_physical_lines()
    }

    fn render(
        &self,
        output: &mut String,
        width: usize,
        start_row: usize,
        row_count: usize,
    ) -> Result<(), RenderError> {
        let mut sb = self.scrollback.borrow_mut();
        sb.ensure_layout(width);
        let total = sb.total_physical_lines();
        if start_row + row_count > total {
            return Err(RenderError::OutOfRange { start: start_row, count: row_count, height: total });
        }
        for row in start_row..start_row + row_count {
            let Ok((line_index, row_in_line)) = sb.find_logical_line_at_physical_row(row) else {
                break;
            };
            let text = sb.line_text(line_index).unwrap_or("").to_string();
            let segment = nth_row(&text, width, row_in_line).unwrap_or("").to_string();
            output.push_str(&segment);
            output.push_str("\x1b[K\r\n");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_reflects_layout_at_width() {
        let sb = RefCell::new(Scrollback::new(80));
        sb.borrow_mut().append_line("abcdefgh");
        let layer = ScrollbackLayer::new(&sb);
        assert_eq!(layer.get_height(4), 2);
    }

    #[test]
    fn render_emits_requested_rows() {
        let sb = RefCell::new(Scrollback::new(80));
        sb.borrow_mut().append_line("hello");
        let layer = ScrollbackLayer::new(&sb);
        let mut out = String::new();
        layer.render(&mut out, 80, 0, 1).unwrap();
        assert_eq!(out, "hello\x1b[K\r\n");
    }

    #[test]
    fn render_wraps_a_line_with_no_embedded_lf_into_its_own_rows() {
        let sb = RefCell::new(Scrollback::new(80));
        sb.borrow_mut().append_line("abcdefgh");
        let layer = ScrollbackLayer::new(&sb);
        let mut out = String::new();
        layer.render(&mut out, 4, 1, 1).unwrap();
        assert_eq!(out, "efgh\x1b[K\r\n");
    }
}
