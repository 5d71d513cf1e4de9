//! XML documentation comments.

use super::Renderable;
use crate::SourceWriter;

/// A documentation comment assembled from XML sections.
///
/// Sections render in a fixed order: summary, type parameters, parameters,
/// returns, remarks, then free-form trailer lines. Every line, including
/// each line of multi-line section text, gets the configured prefix.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocComment {
    pub summary: Option<String>,
    pub type_params: Vec<(String, String)>,
    pub params: Vec<(String, String)>,
    pub returns: Option<String>,
    pub remarks: Option<String>,
    pub trailer: Vec<String>,
}

impl DocComment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(mut self, text: impl Into<String>) -> Self {
        self.summary = Some(text.into());
        self
    }

    pub fn type_param(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.type_params.push((name.into(), text.into()));
        self
    }

    pub fn param(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.params.push((name.into(), text.into()));
        self
    }

    pub fn returns(mut self, text: impl Into<String>) -> Self {
        self.returns = Some(text.into());
        self
    }

    pub fn remarks(mut self, text: impl Into<String>) -> Self {
        self.remarks = Some(text.into());
        self
    }

    /// Add a free-form line after the XML sections.
    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.trailer.push(text.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
            && self.type_params.is_empty()
            && self.params.is_empty()
            && self.returns.is_none()
            && self.remarks.is_none()
            && self.trailer.is_empty()
    }
}

impl Renderable for DocComment {
    fn render(&self, out: &mut SourceWriter, _tail: bool) {
        let prefix = out.config().doc_prefix.clone();
        let mut write = |text: &str| {
            for line in text.split('\n') {
                let line = line.strip_suffix('\r').unwrap_or(line);
                if line.is_empty() {
                    out.append_line(&prefix);
                } else {
                    out.append_line(&format!("{prefix} {line}"));
                }
            }
        };

        if let Some(summary) = &self.summary {
            write("<summary>");
            write(summary);
            write("</summary>");
        }
        for (name, text) in &self.type_params {
            write(&format!("<typeparam name=\"{name}\">{text}</typeparam>"));
        }
        for (name, text) in &self.params {
            write(&format!("<param name=\"{name}\">{text}</param>"));
        }
        if let Some(returns) = &self.returns {
            write(&format!("<returns>{returns}</returns>"));
        }
        if let Some(remarks) = &self.remarks {
            write("<remarks>");
            write(remarks);
            write("</remarks>");
        }
        for line in &self.trailer {
            write(line);
        }
    }
}
