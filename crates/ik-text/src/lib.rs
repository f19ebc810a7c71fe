//! Pure, allocation-light text primitives shared by the editor, scrollback
//! and renderer: CSI sequence recognition, East Asian Width accounting, and
//! grapheme cluster boundaries.
//!
//! Every function here is infallible for well-formed UTF-8 input and treats
//! malformed input defensively (one byte, one column) rather than panicking,
//! since a single stray byte from a paste or a partially-read tool response
//! must never bring a frame render down.

pub mod csi;
pub mod grapheme;
pub mod output_style;
pub mod width;

pub use csi::skip_csi;
pub use output_style::OutputCategory;
pub use width::{char_width, fg_256, str_width};
