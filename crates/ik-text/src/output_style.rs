//! Output category styling shared by the scrollback formatter and the
//! transcript-entry renderer: a fixed prefix glyph and 256-color palette
//! index per category of appended line.

/// Category of a line appended to the scrollback, used to pick a prefix
/// glyph and a foreground color when formatting it for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputCategory {
    UserInput,
    ModelText,
    ToolRequest,
    ToolResponse,
    Warning,
    SlashCmd,
    SlashOutput,
    SystemPrompt,
}

/// SGR reset sequence.
pub const ANSI_RESET: &str = "\x1b[0m";

impl OutputCategory {
    /// Prefix glyph for this category, or `None` if the category renders
    /// with no leading marker.
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            OutputCategory::UserInput => Some("❯"),
            OutputCategory::ModelText => Some("●"),
            OutputCategory::ToolRequest => Some("→"),
            OutputCategory::ToolResponse => Some("←"),
            OutputCategory::Warning => Some("⚠"),
            OutputCategory::SlashCmd | OutputCategory::SlashOutput | OutputCategory::SystemPrompt => {
                None
            }
        }
    }

    /// 256-color palette index for this category, or `None` for the
    /// terminal's default foreground.
    pub fn color(self) -> Option<u8> {
        match self {
            OutputCategory::UserInput | OutputCategory::ModelText => None,
            OutputCategory::ToolRequest | OutputCategory::ToolResponse => Some(242),
            OutputCategory::Warning => Some(179),
            OutputCategory::SlashCmd | OutputCategory::SlashOutput => Some(242),
            OutputCategory::SystemPrompt => Some(153),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_input_has_no_color_override() {
        assert_eq!(OutputCategory::UserInput.color(), None);
        assert_eq!(OutputCategory::UserInput.prefix(), Some("❯"));
    }

    #[test]
    fn warning_is_subdued_yellow() {
        assert_eq!(OutputCategory::Warning.color(), Some(179));
        assert_eq!(OutputCategory::Warning.prefix(), Some("⚠"));
    }

    #[test]
    fn slash_categories_have_no_prefix() {
        assert_eq!(OutputCategory::SlashCmd.prefix(), None);
        assert_eq!(OutputCategory::SlashOutput.prefix(), None);
        assert_eq!(OutputCategory::SystemPrompt.prefix(), None);
    }
}
