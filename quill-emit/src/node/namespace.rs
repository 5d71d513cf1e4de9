use super::{Node, Renderable, Spacing, render_sequence};
use crate::SourceWriter;

/// `namespace <name> { ... }` holding blank-line separated entries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NamespaceDecl {
    pub name: String,
    pub entries: Vec<Node>,
}

impl NamespaceDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn entry(mut self, node: impl Into<Node>) -> Self {
        self.entries.push(node.into());
        self
    }
}

impl Renderable for NamespaceDecl {
    fn render(&self, out: &mut SourceWriter, tail: bool) {
        out.append_line(&format!("namespace {}", self.name));
        out.append_line("{");
        {
            let mut inner = out.indent_in(1);
            render_sequence(&self.entries, &mut inner, false, Spacing::Entries);
        }
        if tail {
            out.append("}");
        } else {
            out.append_line("}");
        }
    }
}
