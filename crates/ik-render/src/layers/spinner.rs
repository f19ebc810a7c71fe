use crate::layer::{Layer, RenderError};

/// Braille spinner frames (U+2800 block), per the glyph set named in the
/// external interfaces section; the ASCII `|/-\` alternative is not carried
/// forward (design notes Open Question 4).
const FRAMES: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

pub struct SpinnerLayer {
    pub visible: bool,
    pub frame: usize,
    pub label: String,
}

impl SpinnerLayer {
    pub fn glyph(&self) -> char {
        FRAMES[self.frame % FRAMES.len()]
    }
}

impl Layer for SpinnerLayer {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn get_height(&self, _width: usize) -> usize {
        1
    }

    fn render(
        &self,
        output: &mut String,
        _width: usize,
        start_row: usize,
        row_count: usize,
    ) -> Result<(), RenderError> {
        if start_row + row_count > 1 {
            return Err(RenderError::OutOfRange { start: start_row, count: row_count, height: 1 });
        }
        if row_count == 1 {
            output.push(self.glyph());
            output.push(' ');
            output.push_str(&self.label);
            output.push_str("\x1b[K\r\n");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_cycles_through_braille_glyphs() {
        let spinner = SpinnerLayer { visible: true, frame: 9, label: "thinking".into() };
        assert_eq!(spinner.glyph(), FRAMES[1]);
    }

    #[test]
    fn render_includes_label_and_clear_to_eol() {
        let spinner = SpinnerLayer { visible: true, frame: 0, label: "thinking".into() };
        let mut out = String::new();
        spinner.render(&mut out, 80, 0, 1).unwrap();
        assert_eq!(out, "⠋ thinking\x1b[K\r\n");
    }
}
