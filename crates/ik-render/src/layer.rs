//! The layer capability set the compositing cake composes over.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("invalid argument: {0}")]
    InvalidArg(String),
    #[error("row range out of bounds: start={start} count={count} height={height}")]
    OutOfRange { start: usize, count: usize, height: usize },
}

/// A horizontal slice of the composited document. Layers are visited top to
/// bottom; each one occupies a contiguous run of document rows equal to its
/// `get_height`.
pub trait Layer {
    /// Consulted every frame, never cached — a layer may become visible or
    /// invisible between frames without the cake needing to be rebuilt.
    fn is_visible(&self) -> bool;

    /// Row count this layer occupies when visible. May depend on `width`
    /// (wrapping) so callers must not cache it across a width change.
    fn get_height(&self, width: usize) -> usize;

    /// Append rows `[start_row, start_row + row_count)` of this layer's
    /// content, in terminal-ready form (CR LF line endings), into `output`.
    fn render(
        &self,
        output: &mut String,
        width: usize,
        start_row: usize,
        row_count: usize,
    ) -> Result<(), RenderError>;
}
