use crate::layer::{Layer, RenderError};
use ik_text::fg_256;

const HEIGHT: usize = 6;
const BANNER_COLOR: u8 = 111;

/// Fixed 6-row ASCII banner with ANSI-colored box-drawing characters.
/// Supports partial rendering of any contiguous row subset.
pub struct BannerLayer {
    pub visible: bool,
}

fn rows(width: usize) -> [String; HEIGHT] {
    let w = width.max(4);
    let inner = w - 2;
    [
        format!("\u{256D}{}\u{256E}", "\u{2500}".repeat(inner)),
        format!("\u{2502}{:^inner$}\u{2502}", "IKIGAI", inner = inner),
        format!("\u{2502}{:^inner$}\u{2502}", "", inner = inner),
        format!("\u{2502}{:^inner$}\u{2502}", "an agent shell", inner = inner),
        format!("\u{2502}{:^inner$}\u{2502}", "", inner = inner),
        format!("\u{2570}{}\u{256F}", "\u{2500}".repeat(inner)),
    ]
}

impl Layer for BannerLayer {
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
        let lines = rows(width);
        for line in &lines[start_row..start_row + row_count] {
            output.push_str(&fg_256(BANNER_COLOR));
            output.push_str(line);
            output.push_str("\x1b[0m\x1b[K\r\n");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_is_fixed_at_six() {
        let banner = BannerLayer { visible: true };
        assert_eq!(banner.get_height(80), 6);
    }

    #[test]
    fn partial_render_returns_requested_subset() {
        let banner = BannerLayer { visible: true };
        let mut out = String::new();
        banner.render(&mut out, 20, 1, 2).unwrap();
        assert_eq!(out.matches("\r\n").count(), 2);
    }

    #[test]
    fn out_of_range_row_window_errors() {
        let banner = BannerLayer { visible: true };
        let mut out = String::new();
        assert!(banner.render(&mut out, 20, 5, 5).is_err());
    }
}
