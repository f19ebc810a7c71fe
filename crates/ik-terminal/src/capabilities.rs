//! Terminal capability probing.
//!
//! A single cheap probe run once at startup; the render layer and transcript
//! formatter (`ik-text::output_style`) consult the `supports_color` flag
//! instead of re-deriving it from the environment on every frame.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct TerminalCapabilities {
    pub supports_color: bool,
}

impl TerminalCapabilities {
    /// Detect color support from the environment: `NO_COLOR` (any value)
    /// disables it unconditionally; otherwise require `TERM` to be set and
    /// not `dumb`.
    pub fn detect() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some();
        let dumb_term = std::env::var("TERM").map(|t| t == "dumb").unwrap_or(true);
        Self {
            supports_color: !no_color && !dumb_term,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_env_disables_support() {
        // SAFETY: test runs single-threaded within this process; no other
        // test in this crate reads these vars concurrently.
        unsafe {
            std::env::set_var("TERM", "xterm-256color");
            std::env::set_var("NO_COLOR", "1");
        }
        assert!(!TerminalCapabilities::detect().supports_color);
        unsafe {
            std::env::remove_var("NO_COLOR");
        }
    }

    #[test]
    fn dumb_term_disables_support() {
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::set_var("TERM", "dumb");
        }
        assert!(!TerminalCapabilities::detect().supports_color);
    }
}
