//! Layer cake compositing engine, cursor-screen-position simulation, the
//! direct-draw combined renderer the REPL calls every frame, and the
//! transcript-entry formatter that builds display text before it reaches
//! scrollback storage.

pub mod cake;
pub mod cursor;
pub mod direct;
pub mod layer;
pub mod layers;
pub mod transcript;

pub use cake::LayerCake;
pub use layer::{Layer, RenderError};
