//! Per-line classification deciding whether a line receives indentation.

use std::ops::Range;

/// Whether a completed line is indented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Prefixed with the current indentation.
    Indented,
    /// Written at column zero regardless of depth (e.g. `#if DEBUG`).
    Flush,
}

/// Result of classifying one line: its kind and the byte range to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    pub kind: LineKind,
    pub content: Range<usize>,
}

impl LineClass {
    /// Indent the whole line.
    pub fn indented(line: &str) -> Self {
        Self {
            kind: LineKind::Indented,
            content: 0..line.len(),
        }
    }

    /// Write `content` of the line without indentation.
    pub fn flush(content: Range<usize>) -> Self {
        Self {
            kind: LineKind::Flush,
            content,
        }
    }
}

/// A line classifier.
pub type Classifier = fn(&str) -> LineClass;

/// Indent every line as-is.
pub fn indent_all(line: &str) -> LineClass {
    LineClass::indented(line)
}

/// Flush preprocessor directives (`#region`, `#if`, ...) to column zero.
///
/// Leading whitespace before the `#` is dropped.
pub fn preprocessor_lines(line: &str) -> LineClass {
    let start = line.len() - line.trim_start().len();
    if line[start..].starts_with('#') {
        LineClass::flush(start..line.len())
    } else {
        LineClass::indented(line)
    }
}
