//! Tool subsystem: directory discovery, a registry with override-on-insert
//! semantics, and per-invocation subprocess execution with `ik://` URI
//! translation.

pub mod discovery;
pub mod envelope;
pub mod exec;
pub mod paths;
pub mod registry;

pub use discovery::discover;
pub use envelope::ErrorKind;
pub use exec::execute_tool;
pub use paths::Paths;
pub use registry::{ToolEntry, ToolRegistry};
