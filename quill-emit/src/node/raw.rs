//! Literal text nodes.

use super::Renderable;
use crate::SourceWriter;

/// How raw text reaches the writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RawMode {
    /// Every line is indented (and classified) like any other output.
    #[default]
    Indented,
    /// Written as-is, bypassing indentation. Used for content that must not
    /// be reflowed, such as multi-line string literals.
    Verbatim,
}

/// A block of literal text, possibly spanning several lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawText {
    pub text: String,
    pub mode: RawMode,
}

impl RawText {
    /// Text indented at the current depth.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mode: RawMode::Indented,
        }
    }

    /// Text written verbatim.
    pub fn verbatim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mode: RawMode::Verbatim,
        }
    }
}

impl Renderable for RawText {
    fn render(&self, out: &mut SourceWriter, tail: bool) {
        match (self.mode, tail) {
            (RawMode::Indented, false) => out.append_line(&self.text),
            (RawMode::Indented, true) => out.append(strip_newline(&self.text)),
            (RawMode::Verbatim, false) => out.append_raw_line(&self.text),
            (RawMode::Verbatim, true) => out.append_raw(strip_newline(&self.text)),
        };
    }
}

/// Drop one trailing line break so a tail node leaves its line open.
fn strip_newline(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}
