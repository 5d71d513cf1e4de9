//! The recursive code block.
//!
//! One [`CodeBlock`] shape covers a bare statement sequence, a brace block,
//! an arrow-expression body and a bracketed argument list. The variation is
//! in three flags and the bracket strings:
//!
//! - `brackets`: wrap the children in an indented open/close pair.
//! - `expression`: the block's content is a single expression, so its last
//!   line stays open for whatever encloses it.
//! - `partial`: header, children and footer form one continuous unit
//!   (`return (` ... `);`), so the header does not end its line.

use super::{Node, Renderable, Spacing, render_sequence};
use crate::SourceWriter;

/// Literal open/close delimiter pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brackets {
    pub open: String,
    pub close: String,
}

impl Brackets {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    pub fn braces() -> Self {
        Self::new("{", "}")
    }

    pub fn parens() -> Self {
        Self::new("(", ")")
    }

    pub fn square() -> Self {
        Self::new("[", "]")
    }
}

/// A sequence of child nodes with optional header, footer and brackets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CodeBlock {
    pub header: Option<String>,
    pub footer: Option<String>,
    pub brackets: Option<Brackets>,
    pub expression: bool,
    pub partial: bool,
    pub children: Vec<Node>,
}

impl CodeBlock {
    /// A bare statement sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// `header` followed by a brace block.
    pub fn braced(header: impl Into<String>) -> Self {
        Self::new().header(header).brackets(Brackets::braces())
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn brackets(mut self, brackets: Brackets) -> Self {
        self.brackets = Some(brackets);
        self
    }

    /// Mark the whole block as one expression.
    pub fn expression(mut self) -> Self {
        self.expression = true;
        self
    }

    /// Let header, body and footer run together as one unit.
    pub fn partial(mut self) -> Self {
        self.partial = true;
        self
    }

    /// Add a child node.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Add multiple child nodes.
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.children.iter().all(Node::is_separator)
    }

    /// Whether the final text of this block is left open for a follower.
    ///
    /// A footer is glued onto the body when the block is an expression or a
    /// partial unit. Without a footer, the block's own tail position or its
    /// expression flavor decides.
    pub fn glues(&self, tail: bool) -> bool {
        if self.footer.is_some() {
            self.partial || self.expression
        } else {
            tail || self.expression
        }
    }
}

impl Renderable for CodeBlock {
    fn render(&self, out: &mut SourceWriter, tail: bool) {
        let glue = self.glues(tail);

        if let Some(header) = &self.header {
            if self.partial {
                out.append(header);
            } else {
                out.append_line(header);
            }
        }

        match &self.brackets {
            Some(brackets) => {
                out.append_line(&brackets.open);
                {
                    let mut inner = out.indent_in(1);
                    render_sequence(&self.children, &mut inner, false, Spacing::Statements);
                }
                if glue {
                    out.append(&brackets.close);
                } else {
                    out.append_line(&brackets.close);
                }
            }
            None => render_sequence(&self.children, out, glue, Spacing::Statements),
        }

        if let Some(footer) = &self.footer {
            out.append(footer);
            if !tail {
                out.end_line();
            }
        }
    }
}
