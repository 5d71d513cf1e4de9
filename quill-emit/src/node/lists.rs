//! Attribute and type-constraint lines attached to declarations.

use super::Renderable;
use crate::SourceWriter;

/// Attribute lines (`[Serializable]`) placed above a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttributeList {
    pub entries: Vec<String>,
}

impl AttributeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute; the surrounding brackets are optional.
    pub fn attribute(mut self, attribute: impl Into<String>) -> Self {
        self.entries.push(attribute.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn line(entry: &str) -> String {
        if entry.starts_with('[') {
            entry.to_string()
        } else {
            format!("[{entry}]")
        }
    }
}

impl Renderable for AttributeList {
    fn render(&self, out: &mut SourceWriter, tail: bool) {
        let lines: Vec<String> = self.entries.iter().map(|e| Self::line(e)).collect();
        render_lines(&lines, out, tail);
    }
}

/// Generic constraint clauses (`where T : class`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConstraintList {
    pub entries: Vec<String>,
}

impl ConstraintList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a constraint; the leading `where` is optional.
    pub fn constraint(mut self, constraint: impl Into<String>) -> Self {
        self.entries.push(constraint.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn line(entry: &str) -> String {
        if entry.starts_with("where ") {
            entry.to_string()
        } else {
            format!("where {entry}")
        }
    }
}

impl Renderable for ConstraintList {
    fn render(&self, out: &mut SourceWriter, tail: bool) {
        let lines: Vec<String> = self.entries.iter().map(|e| Self::line(e)).collect();
        render_lines(&lines, out, tail);
    }
}

fn render_lines(lines: &[String], out: &mut SourceWriter, tail: bool) {
    for (i, line) in lines.iter().enumerate() {
        if tail && i + 1 == lines.len() {
            out.append(line);
        } else {
            out.append_line(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EmitConfig;

    fn render(node: &impl Renderable, tail: bool) -> String {
        let mut out = SourceWriter::new(EmitConfig::default());
        node.render(&mut out, tail);
        out.to_string()
    }

    #[test]
    fn test_attributes() {
        let attrs = AttributeList::new()
            .attribute("Serializable")
            .attribute("[Obsolete(\"old\")]");
        assert_eq!(render(&attrs, false), "[Serializable]\n[Obsolete(\"old\")]\n");
    }

    #[test]
    fn test_constraints() {
        let constraints = ConstraintList::new()
            .constraint("T : class")
            .constraint("where U : struct");
        assert_eq!(render(&constraints, false), "where T : class\nwhere U : struct\n");
        assert_eq!(render(&constraints, true), "where T : class\nwhere U : struct");
    }

    #[test]
    fn test_empty_renders_nothing() {
        assert_eq!(render(&AttributeList::new(), false), "");
        assert!(ConstraintList::new().is_empty());
    }
}
