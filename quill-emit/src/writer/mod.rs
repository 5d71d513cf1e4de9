//! Indentation-aware line writer.
//!
//! [`SourceWriter`] keeps two buffers: the finished output and the line
//! currently being assembled. Text is indented when a line is completed,
//! using the depth in effect at that moment.

mod classify;
mod indent;

use std::{
    borrow::Cow,
    fmt,
    ops::{Deref, DerefMut},
};

pub use classify::{Classifier, LineClass, LineKind, indent_all, preprocessor_lines};
pub use indent::Indent;

use crate::{EmitConfig, Error, Result};

/// Writer that turns text fragments into indented lines.
///
/// # Example
///
/// ```
/// use quill_emit::{EmitConfig, SourceWriter};
///
/// let mut writer = SourceWriter::new(EmitConfig::default());
/// writer.append_line("void Run()").append_line("{");
/// {
///     let mut body = writer.indent_in(1);
///     body.append("Console.").append("WriteLine(1);\n");
/// }
/// writer.append("}");
///
/// assert_eq!(
///     writer.to_string(),
///     "void Run()\n{\n    Console.WriteLine(1);\n}"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SourceWriter {
    config: EmitConfig,
    unit: Cow<'static, str>,
    output: String,
    line: String,
    depth: usize,
    classifier: Classifier,
    fault: Option<Error>,
}

impl SourceWriter {
    pub fn new(config: EmitConfig) -> Self {
        Self {
            unit: config.indent.unit(),
            config,
            output: String::new(),
            line: String::new(),
            depth: 0,
            classifier: indent_all,
            fault: None,
        }
    }

    /// Configuration of the document being written.
    pub fn config(&self) -> &EmitConfig {
        &self.config
    }

    /// Current indent depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Append text without forcing a line break.
    ///
    /// Every `\n` completes the pending line; text after the last `\n`
    /// stays pending until a later call completes it.
    pub fn append(&mut self, text: &str) -> &mut Self {
        let mut rest = text;
        while let Some(pos) = rest.find('\n') {
            self.line.push_str(&rest[..pos]);
            if self.line.ends_with('\r') {
                self.line.pop();
            }
            self.flush_line();
            rest = &rest[pos + 1..];
        }
        self.line.push_str(rest);
        self
    }

    /// Append text and make sure the line it ends on is terminated.
    pub fn append_line(&mut self, text: &str) -> &mut Self {
        self.append(text);
        if !text.ends_with('\n') {
            self.flush_line();
        }
        self
    }

    /// Append text verbatim, bypassing indentation and classification.
    ///
    /// A pending line is written out first (indented, but not terminated),
    /// so the raw text continues it.
    pub fn append_raw(&mut self, text: &str) -> &mut Self {
        if !self.line.is_empty() {
            let pending = std::mem::take(&mut self.line);
            let formatted = self.format_or_latch(&pending);
            self.output.push_str(&formatted);
        }
        self.output.push_str(text);
        self
    }

    /// Append text verbatim and terminate it with a newline if needed.
    pub fn append_raw_line(&mut self, text: &str) -> &mut Self {
        self.append_raw(text);
        if !text.ends_with('\n') {
            self.output.push_str(self.config.newline.as_str());
        }
        self
    }

    /// Terminate the current line if one is open.
    pub fn end_line(&mut self) -> &mut Self {
        if !self.line.is_empty() {
            self.flush_line();
        } else if !self.at_line_start() {
            self.output.push_str(self.config.newline.as_str());
        }
        self
    }

    /// Terminate the current line, then write an empty line.
    pub fn blank_line(&mut self) -> &mut Self {
        self.end_line();
        self.output.push_str(self.config.newline.as_str());
        self
    }

    /// Whether text written now would continue an unterminated line.
    pub fn is_line_open(&self) -> bool {
        !self.line.is_empty() || !self.at_line_start()
    }

    /// Increase the depth for as long as the returned guard lives.
    ///
    /// The guard dereferences to the writer, and dropping it restores the
    /// previous depth on every exit path, unwinding included.
    pub fn indent_in(&mut self, levels: usize) -> IndentGuard<'_> {
        self.depth += levels;
        IndentGuard {
            writer: self,
            levels,
        }
    }

    /// Replace the ambient classifier.
    pub fn set_classifier(&mut self, classifier: Classifier) -> &mut Self {
        self.classifier = classifier;
        self
    }

    /// Override the classifier for as long as the returned guard lives.
    pub fn classify_with(&mut self, classifier: Classifier) -> ClassifierGuard<'_> {
        let previous = std::mem::replace(&mut self.classifier, classifier);
        ClassifierGuard {
            writer: self,
            previous,
        }
    }

    /// Remove trailing whitespace from everything written so far.
    ///
    /// When the pending line is all whitespace the trim continues into the
    /// finished output. Its last partial line then stays in place, already
    /// indented, and subsequent appends continue it.
    pub fn trim_end(&mut self) -> &mut Self {
        let keep = self.line.trim_end().len();
        self.line.truncate(keep);
        if self.line.is_empty() {
            let keep = self.output.trim_end().len();
            self.output.truncate(keep);
        }
        self
    }

    /// Consume the writer, returning the text or the first classifier fault.
    pub fn finish(self) -> Result<String> {
        match self.fault {
            Some(fault) => Err(fault),
            None => Ok(self.to_string()),
        }
    }

    fn at_line_start(&self) -> bool {
        self.output.is_empty() || self.output.ends_with('\n')
    }

    fn flush_line(&mut self) {
        let pending = std::mem::take(&mut self.line);
        let formatted = self.format_or_latch(&pending);
        // whitespace-only lines are written empty
        if !formatted.trim().is_empty() {
            self.output.push_str(&formatted);
        }
        self.output.push_str(self.config.newline.as_str());
    }

    fn format_or_latch(&mut self, line: &str) -> String {
        match self.format_line(line) {
            Ok(formatted) => formatted,
            Err(fault) => {
                tracing::error!(%fault, "line classifier fault");
                self.fault.get_or_insert(fault);
                line.to_string()
            }
        }
    }

    /// Apply classification and indentation to one line (without newline).
    fn format_line(&self, line: &str) -> Result<String> {
        let LineClass { kind, content } = (self.classifier)(line);
        let Some(text) = line.get(content.clone()) else {
            return Err(Error::Classifier {
                line: line.to_string(),
                start: content.start,
                end: content.end,
                len: line.len(),
            });
        };

        if text.is_empty() {
            return Ok(String::new());
        }

        let indent = kind == LineKind::Indented && self.at_line_start();
        let mut formatted = String::with_capacity(text.len() + self.unit.len() * self.depth);
        if indent {
            for _ in 0..self.depth {
                formatted.push_str(&self.unit);
            }
        }
        formatted.push_str(text);
        Ok(formatted)
    }
}

/// Renders finished output plus the pending line, leaving the writer as is.
impl fmt::Display for SourceWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.output)?;
        if !self.line.is_empty() {
            match self.format_line(&self.line) {
                Ok(formatted) => f.write_str(&formatted)?,
                Err(_) => f.write_str(&self.line)?,
            }
        }
        Ok(())
    }
}

/// Scoped indentation, see [`SourceWriter::indent_in`].
///
/// Depth applies when a line is completed, not when it is started: text
/// still pending when the guard drops is indented at the restored depth.
/// Terminate lines inside the scope that should carry its indentation.
#[derive(Debug)]
pub struct IndentGuard<'a> {
    writer: &'a mut SourceWriter,
    levels: usize,
}

impl Deref for IndentGuard<'_> {
    type Target = SourceWriter;

    fn deref(&self) -> &SourceWriter {
        self.writer
    }
}

impl DerefMut for IndentGuard<'_> {
    fn deref_mut(&mut self) -> &mut SourceWriter {
        self.writer
    }
}

impl Drop for IndentGuard<'_> {
    fn drop(&mut self) {
        self.writer.depth -= self.levels;
    }
}

/// Scoped classifier override, see [`SourceWriter::classify_with`].
#[derive(Debug)]
pub struct ClassifierGuard<'a> {
    writer: &'a mut SourceWriter,
    previous: Classifier,
}

impl Deref for ClassifierGuard<'_> {
    type Target = SourceWriter;

    fn deref(&self) -> &SourceWriter {
        self.writer
    }
}

impl DerefMut for ClassifierGuard<'_> {
    fn deref_mut(&mut self) -> &mut SourceWriter {
        self.writer
    }
}

impl Drop for ClassifierGuard<'_> {
    fn drop(&mut self) {
        self.writer.classifier = self.previous;
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    use super::*;
    use crate::Newline;

    fn writer() -> SourceWriter {
        SourceWriter::new(EmitConfig::default())
    }

    #[test]
    fn test_append_line() {
        let mut w = writer();
        w.append_line("a").append_line("b\n");
        assert_eq!(w.to_string(), "a\nb\n");
    }

    #[test]
    fn test_text_crossing_append_calls() {
        let mut w = writer();
        {
            let mut inner = w.indent_in(1);
            inner.append("var x = ").append("Compute(");
            inner.append("1);\nvar y");
            inner.append(" = 2;");
        }
        // the pending line picks up the depth in effect when it completes
        w.end_line();
        assert_eq!(w.to_string(), "    var x = Compute(1);\nvar y = 2;\n");
    }

    #[test]
    fn test_embedded_newlines_are_indented_per_line() {
        let mut w = writer();
        let mut inner = w.indent_in(2);
        inner.append_line("first\nsecond\n\nthird");
        drop(inner);
        assert_eq!(
            w.to_string(),
            "        first\n        second\n\n        third\n"
        );
    }

    #[test]
    fn test_pending_line_after_guard_drop() {
        let mut w = writer();
        {
            let mut inner = w.indent_in(1);
            inner.append_line("done();").append("open");
            assert_eq!(inner.to_string(), "    done();\n    open");
        }
        assert_eq!(w.to_string(), "    done();\nopen");
    }

    #[test]
    fn test_whitespace_only_lines_are_empty() {
        let mut w = writer();
        let mut inner = w.indent_in(1);
        inner.append_line("a\n   \n\t\nb");
        drop(inner);
        assert_eq!(w.to_string(), "    a\n\n\n    b\n");
    }

    #[test]
    fn test_carriage_returns_dropped() {
        let mut w = writer();
        w.append("a\r").append("\nb\r\nc");
        w.end_line();
        assert_eq!(w.to_string(), "a\nb\nc\n");
    }

    #[test]
    fn test_raw_flushes_pending_without_newline() {
        let mut w = writer();
        let mut inner = w.indent_in(1);
        inner.append("var s = ");
        inner.append_raw("@\"line one\nline two\"");
        inner.append_line(";");
        inner.append_line("next();");
        drop(inner);
        assert_eq!(
            w.to_string(),
            "    var s = @\"line one\nline two\";\n    next();\n"
        );
    }

    #[test]
    fn test_raw_line() {
        let mut w = writer();
        let mut inner = w.indent_in(1);
        inner.append_raw_line("<<EOF");
        inner.append_raw_line("EOF\n");
        inner.append_line("done");
        drop(inner);
        assert_eq!(w.to_string(), "<<EOF\nEOF\n    done\n");
    }

    #[test]
    fn test_end_line_is_idempotent() {
        let mut w = writer();
        w.append("x").end_line().end_line();
        assert_eq!(w.to_string(), "x\n");

        let mut raw = writer();
        raw.append_raw("y").end_line().end_line();
        assert_eq!(raw.to_string(), "y\n");
    }

    #[test]
    fn test_blank_line() {
        let mut w = writer();
        let mut inner = w.indent_in(1);
        inner.append("a").blank_line().append_line("b");
        drop(inner);
        assert_eq!(w.to_string(), "    a\n\n    b\n");
    }

    #[test]
    fn test_indent_zero_is_noop() {
        let mut w = writer();
        let mut same = w.indent_in(0);
        same.append_line("flat");
        assert_eq!(same.depth(), 0);
        drop(same);
        assert_eq!(w.to_string(), "flat\n");
    }

    #[test]
    fn test_nested_guards_restore_depth() {
        let mut w = writer();
        {
            let mut outer = w.indent_in(1);
            {
                let mut inner = outer.indent_in(2);
                assert_eq!(inner.depth(), 3);
                inner.append_line("deep");
            }
            assert_eq!(outer.depth(), 1);
        }
        assert_eq!(w.depth(), 0);
        assert_eq!(w.to_string(), "            deep\n");
    }

    #[test]
    fn test_guard_restores_depth_on_panic() {
        let mut w = writer();
        let result = catch_unwind(AssertUnwindSafe(|| {
            let mut scope = w.indent_in(3);
            scope.append_line("inside");
            panic!("render failed");
        }));
        assert!(result.is_err());
        assert_eq!(w.depth(), 0);
        w.append_line("after");
        assert_eq!(w.to_string(), "            inside\nafter\n");
    }

    #[test]
    fn test_trim_end_within_pending_line() {
        let mut w = writer();
        w.append_line("keep").append("x   ");
        w.trim_end().append_line(";");
        assert_eq!(w.to_string(), "keep\nx;\n");
    }

    #[test]
    fn test_trim_end_across_buffer_boundary() {
        let mut w = writer();
        {
            let mut inner = w.indent_in(1);
            inner.append_line("return 1;").append_line("").append("   ");
            inner.trim_end();
            // continues the already indented "return 1;" line
            inner.append_line(" // done");
        }
        assert_eq!(w.to_string(), "    return 1; // done\n");
    }

    #[test]
    fn test_to_string_is_idempotent() {
        let mut w = writer();
        let mut inner = w.indent_in(1);
        inner.append_line("a").append("pending");
        let first = inner.to_string();
        let second = inner.to_string();
        assert_eq!(first, "    a\n    pending");
        assert_eq!(first, second);
        inner.append_line(" line");
        drop(inner);
        assert_eq!(w.to_string(), "    a\n    pending line\n");
    }

    #[test]
    fn test_ambient_classifier() {
        let mut w = writer();
        w.set_classifier(preprocessor_lines);
        let mut inner = w.indent_in(1);
        inner.append_line("  #if DEBUG\nLog();\n#endif");
        drop(inner);
        assert_eq!(w.to_string(), "#if DEBUG\n    Log();\n#endif\n");
    }

    #[test]
    fn test_classifier_override_is_restored() {
        let mut w = writer();
        let mut inner = w.indent_in(1);
        {
            let mut directives = inner.classify_with(preprocessor_lines);
            directives.append_line("#region Generated");
        }
        inner.append_line("#not-a-directive-here");
        drop(inner);
        assert_eq!(
            w.to_string(),
            "#region Generated\n    #not-a-directive-here\n"
        );
    }

    #[test]
    fn test_classifier_fault_is_latched() {
        fn broken(line: &str) -> LineClass {
            LineClass::flush(0..line.len() + 4)
        }

        let mut w = writer();
        w.set_classifier(broken);
        w.append_line("oops");
        let err = w.finish().unwrap_err();
        assert_eq!(
            err,
            Error::Classifier {
                line: "oops".to_string(),
                start: 0,
                end: 8,
                len: 4,
            }
        );
    }

    #[test]
    fn test_crlf_newline() {
        let mut w = SourceWriter::new(EmitConfig::default().newline(Newline::CrLf));
        w.append_line("a").blank_line().append_line("b");
        assert_eq!(w.finish().unwrap(), "a\r\n\r\nb\r\n");
    }

    #[test]
    fn test_tab_indent() {
        let mut w = SourceWriter::new(EmitConfig::default().indent(Indent::Tab));
        w.indent_in(2).append_line("x");
        assert_eq!(w.to_string(), "\t\tx\n");
    }
}
