//! Layer cake: an ordered stack of [`Layer`]s composed into a single
//! viewport slice of the document.

use crate::layer::{Layer, RenderError};

pub struct LayerCake {
    layers: Vec<Box<dyn Layer>>,
    pub viewport_row: usize,
    pub viewport_height: usize,
}

impl LayerCake {
    pub fn new(viewport_height: usize) -> Self {
        Self {
            layers: Vec::new(),
            viewport_row: 0,
            viewport_height,
        }
    }

    /// Layers are appended top-of-screen first and never removed; only
    /// their visibility flips across a session.
    pub fn push(&mut self, layer: Box<dyn Layer>) {
        self.layers.push(layer);
    }

    pub fn total_height(&self, width: usize) -> usize {
        self.layers
            .iter()
            .filter(|l| l.is_visible())
            .map(|l| l.get_height(width))
            .sum()
    }

    /// Compose the current viewport into `output`, visiting only layers that
    /// intersect `[viewport_row, viewport_row + viewport_height)`.
    pub fn compose(&self, output: &mut String, width: usize) -> Result<(), RenderError> {
        let mut offset = 0usize;
        let viewport_end = self.viewport_row + self.viewport_height;
        for layer in &self.layers {
            if !layer.is_visible() {
                continue;
            }
            let h = layer.get_height(width);
            let layer_end = offset + h;
            if layer_end <= self.viewport_row || offset >= viewport_end {
                offset = layer_end;
                if offset >= viewport_end {
                    break;
                }
                continue;
            }
            let start_row = self.viewport_row.saturating_sub(offset);
            let overshoot = layer_end.saturating_sub(viewport_end);
            let row_count = h.saturating_sub(start_row).saturating_sub(overshoot);
            if row_count > 0 {
                layer.render(output, width, start_row, row_count)?;
            }
            offset = layer_end;
            if offset >= viewport_end {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Fixed {
        visible: bool,
        height: usize,
        label: char,
        calls: RefCell<Vec<(usize, usize)>>,
    }

    impl Layer for Fixed {
        fn is_visible(&self) -> bool {
            self.visible
        }
        fn get_height(&self, _width: usize) -> usize {
            self.height
        }
        fn render(
            &self,
            output: &mut String,
            _width: usize,
            start_row: usize,
            row_count: usize,
        ) -> Result<(), RenderError> {
            self.calls.borrow_mut().push((start_row, row_count));
            for _ in 0..row_count {
                output.push(self.label);
            }
            Ok(())
        }
    }

    fn fixed(visible: bool, height: usize, label: char) -> Fixed {
        Fixed { visible, height, label, calls: RefCell::new(Vec::new()) }
    }

    #[test]
    fn full_viewport_renders_every_visible_layer_from_zero() {
        let mut cake = LayerCake::new(10);
        cake.push(Box::new(fixed(true, 3, 'a')));
        cake.push(Box::new(fixed(true, 4, 'b')));
        let mut out = String::new();
        cake.compose(&mut out, 80).unwrap();
        assert_eq!(out, "aaabbbb");
    }

    #[test]
    fn invisible_layers_are_skipped_entirely() {
        let mut cake = LayerCake::new(10);
        cake.push(Box::new(fixed(false, 3, 'a')));
        cake.push(Box::new(fixed(true, 2, 'b')));
        let mut out = String::new();
        cake.compose(&mut out, 80).unwrap();
        assert_eq!(out, "bb");
    }

    #[test]
    fn viewport_clips_partial_layers() {
        let mut cake = LayerCake::new(3);
        cake.viewport_row = 2;
        cake.push(Box::new(fixed(true, 3, 'a'))); // rows 0..3
        cake.push(Box::new(fixed(true, 4, 'b'))); // rows 3..7
        let mut out = String::new();
        cake.compose(&mut out, 80).unwrap();
        // viewport [2,5): 1 row of 'a' (row 2), 2 rows of 'b' (rows 3,4)
        assert_eq!(out, "abb");
    }

    #[test]
    fn total_height_sums_only_visible_layers() {
        let mut cake = LayerCake::new(10);
        cake.push(Box::new(fixed(true, 3, 'a')));
        cake.push(Box::new(fixed(false, 100, 'x')));
        cake.push(Box::new(fixed(true, 2, 'b')));
        assert_eq!(cake.total_height(80), 5);
    }
}
