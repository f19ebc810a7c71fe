//! Growable, lazily-allocated containers: a byte array, a line (owned
//! string) array, and a format buffer built on top of the byte array.
//!
//! `Vec<T>` already supplies lazy allocation and amortized doubling growth,
//! so these types are thin named façades rather than reimplementations —
//! they exist to give callers the `append`/`insert_at`/`delete_at`/`get`/
//! `set` vocabulary the rest of the workspace is written against, with
//! `Option`-returning accessors instead of panicking indexing.

pub mod byte_array;
pub mod fmtbuf;
pub mod line_array;

pub use byte_array::ByteArray;
pub use fmtbuf::FormatBuffer;
pub use line_array::LineArray;
