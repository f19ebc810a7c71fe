//! Append-only format buffer: the byte array wrapped with `printf`-style
//! formatted append, indentation, and an idempotent null-terminated readout.
//!
//! Once a byte has been appended it is never dropped until the buffer
//! itself is dropped — there is no `truncate` or `delete` here, only
//! `append`/`appendf`/`indent` and the two readout accessors.

use crate::byte_array::ByteArray;
use std::fmt::Write as _;

#[derive(Debug, Clone, Default)]
pub struct FormatBuffer {
    bytes: ByteArray,
}

impl FormatBuffer {
    pub fn new() -> Self {
        Self {
            bytes: ByteArray::with_capacity(32),
        }
    }

    /// Append the formatted result of `args` (pass `format_args!(...)`).
    ///
    /// `std::fmt::Write` measures and writes in one pass instead of the
    /// C implementation's size-then-format double call to `vsnprintf`;
    /// the two-pass contract it documents (measure, then format into an
    /// exactly-sized buffer) has no equivalent failure mode in safe Rust,
    /// since `write!` into a `String` cannot truncate or overflow.
    pub fn appendf(&mut self, args: std::fmt::Arguments<'_>) {
        let mut scratch = String::new();
        scratch
            .write_fmt(args)
            .expect("formatting into a String is infallible");
        self.bytes.extend_from_slice(scratch.as_bytes());
    }

    pub fn append(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.bytes.extend_from_slice(s.as_bytes());
    }

    pub fn indent(&mut self, n: usize) {
        for _ in 0..n {
            self.bytes.append(b' ');
        }
    }

    /// Ensure the buffer ends with a NUL byte and return the content as a
    /// string slice, excluding that terminator. Idempotent: calling this
    /// repeatedly never appends more than one NUL.
    pub fn get_string(&mut self) -> &str {
        let len = self.bytes.size();
        if len == 0 || self.bytes.get(len - 1) != Some(0) {
            self.bytes.append(0);
        }
        let content = &self.bytes.as_slice()[..self.bytes.size() - 1];
        std::str::from_utf8(content).expect("only UTF-8 text is ever appended")
    }

    /// Length of the content, excluding a trailing NUL if present.
    pub fn get_length(&self) -> usize {
        let len = self.bytes.size();
        if len > 0 && self.bytes.get(len - 1) == Some(0) {
            len - 1
        } else {
            len
        }
    }
}

/// `ik_format_appendf(fmt, ...)` equivalent: `fmtbuf::appendf!(buf, "{}-{}", a, b)`.
#[macro_export]
macro_rules! appendf {
    ($buf:expr, $($arg:tt)*) => {
        $buf.appendf(format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appendf_formats_and_appends() {
        let mut buf = FormatBuffer::new();
        appendf!(buf, "{}={}", "x", 42);
        assert_eq!(buf.get_string(), "x=42");
        assert_eq!(buf.get_length(), 4);
    }

    #[test]
    fn append_is_noop_on_empty() {
        let mut buf = FormatBuffer::new();
        buf.append("");
        assert_eq!(buf.get_length(), 0);
    }

    #[test]
    fn indent_appends_spaces() {
        let mut buf = FormatBuffer::new();
        buf.append("x");
        buf.indent(3);
        assert_eq!(buf.get_string(), "x   ");
    }

    #[test]
    fn get_string_is_idempotent() {
        let mut buf = FormatBuffer::new();
        buf.append("hi");
        let _ = buf.get_string();
        let before = buf.get_length();
        let _ = buf.get_string();
        assert_eq!(buf.get_length(), before);
        assert_eq!(buf.get_string(), "hi");
    }

    #[test]
    fn mixed_append_and_appendf() {
        let mut buf = FormatBuffer::new();
        buf.append("prefix:");
        appendf!(buf, "{:03}", 7);
        assert_eq!(buf.get_string(), "prefix:007");
    }
}
