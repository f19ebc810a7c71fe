use crate::layer::{Layer, RenderError};
use ik_editor::InputBuffer;
use ik_editor::layout::nth_row;
use std::cell::RefCell;

/// The editable input buffer. Always occupies at least one row so a blank
/// editor still reserves cursor space.
pub struct InputLayer<'a> {
    buffer: &'a RefCell<InputBuffer>,
}

impl<'a> InputLayer<'a> {
    pub fn new(buffer: &'a RefCell<InputBuffer>) -> Self {
        Self { buffer }
    }
}

impl Layer for InputLayer<'_> {
    fn is_visible(&self) -> bool {
        true
    }

    fn get_height(&self, width: usize) -> usize {
        self.buffer.borrow_mut().physical_row_count(width).max(1)
    }

    fn render(
        &self,
        output: &mut String,
        width: usize,
        start_row: usize,
        row_count: usize,
    ) -> Result<(), RenderError> {
        let height = self.get_height(width);
        if start_row + row_count > height {
            return Err(RenderError::OutOfRange { start: start_row, count: row_count, height });
        }
        let buf = self.buffer.borrow();
        let text = buf.text();
        for row in start_row..start_row + row_count {
            if let Some(line) = nth_row(text, width, row) {
                output.push_str(line);
            }
            output.push_str("\r\n");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_reserves_one_row() {
        let buf = RefCell::new(InputBuffer::new());
        let layer = InputLayer::new(&buf);
        assert_eq!(layer.get_height(80), 1);
    }

    #[test]
    fn render_emits_text_with_crlf() {
        let buf = RefCell::new(InputBuffer::new());
        buf.borrow_mut().insert_char('h');
        buf.borrow_mut().insert_char('i');
        let layer = InputLayer::new(&buf);
        let mut out = String::new();
        layer.render(&mut out, 80, 0, 1).unwrap();
        assert_eq!(out, "hi\r\n");
    }

    #[test]
    fn render_emits_wrapped_continuation_row_with_no_embedded_lf() {
        let buf = RefCell::new(InputBuffer::new());
        for c in "abcdefgh".chars() {
            buf.borrow_mut().insert_char(c);
        }
        let layer = InputLayer::new(&buf);
        assert_eq!(layer.get_height(3), 3);
        let mut out = String::new();
        layer.render(&mut out, 3, 1, 1).unwrap();
        assert_eq!(out, "def\r\n");
    }
}
