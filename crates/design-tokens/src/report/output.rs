//! Output mode selection.

/// How a report is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Styled when the terminal supports color, plain otherwise.
    #[default]
    Auto,
    /// Always styled with ANSI codes.
    Term,
    /// Never styled.
    Text,
    /// Machine-readable JSON.
    Json,
}

impl OutputMode {
    pub fn should_use_color(self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::Json => false,
        }
    }

    pub fn is_structured(self) -> bool {
        matches!(self, OutputMode::Json)
    }
}
