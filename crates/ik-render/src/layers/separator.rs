use crate::layer::{Layer, RenderError};

/// A single horizontal rule, one row tall, made of `width` box-drawing
/// dashes (U+2500).
pub struct SeparatorLayer {
    pub visible: bool,
}

impl Layer for SeparatorLayer {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn get_height(&self, _width: usize) -> usize {
        1
    }

    fn render(
        &self,
        output: &mut String,
        width: usize,
        start_row: usize,
        row_count: usize,
    ) -> Result<(), RenderError> {
        if start_row + row_count > 1 {
            return Err(RenderError::OutOfRange { start: start_row, count: row_count, height: 1 });
        }
        if row_count == 1 {
            for _ in 0..width {
                output.push('\u{2500}');
            }
            output.push_str("\r\n");
        }
        Ok(())
    }
}
