use crate::layer::{Layer, RenderError};

const REVERSE_BOLD: &str = "\x1b[7;1m";
const RESET: &str = "\x1b[0m";

/// One row per candidate; the selected candidate is rendered reverse+bold.
pub struct CompletionLayer {
    pub visible: bool,
    pub candidates: Vec<String>,
    pub selected: usize,
}

impl Layer for CompletionLayer {
    fn is_visible(&self) -> bool {
        self.visible && !self.candidates.is_empty()
    }

    fn get_height(&self, _width: usize) -> usize {
        self.candidates.len()
    }

    fn render(
        &self,
        output: &mut String,
        width: usize,
        start_row: usize,
        row_count: usize,
    ) -> Result<(), RenderError> {
        let height = self.candidates.len();
        if start_row + row_count > height {
            return Err(RenderError::OutOfRange { start: start_row, count: row_count, height });
        }
        for (i, candidate) in self.candidates.iter().enumerate().skip(start_row).take(row_count) {
            let padded = format!("{candidate:<width$}", width = width);
            if i == self.selected {
                output.push_str(REVERSE_BOLD);
                output.push_str(&padded);
                output.push_str(RESET);
            } else {
                output.push_str(&padded);
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
    fn selected_row_is_reverse_bold() {
        let layer = CompletionLayer {
            visible: true,
            candidates: vec!["alpha".into(), "beta".into()],
            selected: 1,
        };
        let mut out = String::new();
        layer.render(&mut out, 10, 0, 2).unwrap();
        assert!(out.contains("\x1b[7;1mbeta"));
    }

    #[test]
    fn empty_candidate_list_is_invisible() {
        let layer = CompletionLayer { visible: true, candidates: vec![], selected: 0 };
        assert!(!layer.is_visible());
    }
}
