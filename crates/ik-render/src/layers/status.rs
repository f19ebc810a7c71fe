use crate::layer::{Layer, RenderError};
use ik_text::fg_256;

const HEIGHT: usize = 2;
const PILL_COLOR: u8 = 75;

/// Row 1: a separator rule. Row 2: a model/thinking-level pill in a
/// 256-color foreground.
pub struct StatusLayer {
    pub visible: bool,
    pub model: String,
    pub thinking_level: String,
}

impl Layer for StatusLayer {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn get_height(&self, _width: usize) -> usize {
        HEIGHT
    }

    fn render(
        &self,
        output: &mut String,
        width: usize,
        start_row: usize,
        row_count: usize,
    ) -> Result<(), RenderError> {
        if start_row + row_count > HEIGHT {
            return Err(RenderError::OutOfRange { start: start_row, count: row_count, height: HEIGHT });
        }
        for row in start_row..start_row + row_count {
            if row == 0 {
                for _ in 0..width {
                    output.push('\u{2500}');
                }
                output.push_str("\r\n");
            } else {
                output.push_str(&fg_256(PILL_COLOR));
                output.push_str(&format!(" {} [{}] ", self.model, self.thinking_level));
                output.push_str("\x1b[0m\x1b[K\r\n");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_two_contains_model_and_level() {
        let status = StatusLayer { visible: true, model: "opus".into(), thinking_level: "high".into() };
        let mut out = String::new();
        status.render(&mut out, 40, 1, 1).unwrap();
        assert!(out.contains("opus"));
        assert!(out.contains("high"));
    }
}
