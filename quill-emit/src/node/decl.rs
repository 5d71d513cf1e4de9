//! Type and method declarations.

use super::{
    AttributeList, CodeBlock, ConstraintList, DocComment, Node, Renderable, Spacing,
    render_sequence,
};
use crate::SourceWriter;

/// Parts shared by type and method declarations: the literal signature and
/// the optional doc comment, attribute lines and constraint clauses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Declaration {
    pub signature: String,
    pub doc: Option<DocComment>,
    pub attributes: AttributeList,
    pub constraints: ConstraintList,
}

impl Declaration {
    pub fn new(signature: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            ..Self::default()
        }
    }

    /// Doc comment and attribute lines.
    fn render_preamble(&self, out: &mut SourceWriter) {
        if let Some(doc) = self.doc.as_ref().filter(|doc| !doc.is_empty()) {
            doc.render(out, false);
        }
        self.attributes.render(out, false);
    }

    /// Signature and constraint clauses, then `rest` on the still-open last
    /// line. Constraints sit one level deeper; `rest` receives `true` when it
    /// runs at that deeper level and must end its line there.
    fn render_head(
        &self,
        out: &mut SourceWriter,
        signature: &str,
        rest: impl FnOnce(&mut SourceWriter, bool),
    ) {
        if self.constraints.is_empty() {
            out.append(signature);
            rest(out, false);
        } else {
            out.append_line(signature);
            let mut inner = out.indent_in(1);
            self.constraints.render(&mut inner, true);
            rest(&mut inner, true);
        }
    }
}

/// How a type declaration ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeBody {
    /// A brace block of members.
    #[default]
    Braced,
    /// Just `;` after the signature (records, partial declarations).
    Terminated,
}

/// A class, struct, interface, record or enum declaration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypeDecl {
    pub decl: Declaration,
    pub bases: Vec<String>,
    pub body: TypeBody,
    pub members: Vec<Node>,
}

impl TypeDecl {
    pub fn new(signature: impl Into<String>) -> Self {
        Self {
            decl: Declaration::new(signature),
            ..Self::default()
        }
    }

    pub fn doc(mut self, doc: DocComment) -> Self {
        self.decl.doc = Some(doc);
        self
    }

    pub fn attribute(mut self, attribute: impl Into<String>) -> Self {
        self.decl.attributes.entries.push(attribute.into());
        self
    }

    pub fn constraint(mut self, constraint: impl Into<String>) -> Self {
        self.decl.constraints.entries.push(constraint.into());
        self
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.bases.push(base.into());
        self
    }

    pub fn terminated(mut self) -> Self {
        self.body = TypeBody::Terminated;
        self
    }

    pub fn member(mut self, node: impl Into<Node>) -> Self {
        self.members.push(node.into());
        self
    }

    fn signature(&self) -> String {
        if self.bases.is_empty() {
            self.decl.signature.clone()
        } else {
            format!("{} : {}", self.decl.signature, self.bases.join(", "))
        }
    }
}

impl Renderable for TypeDecl {
    fn render(&self, out: &mut SourceWriter, tail: bool) {
        self.decl.render_preamble(out);
        let signature = self.signature();

        match self.body {
            TypeBody::Terminated => {
                self.decl.render_head(out, &signature, |out, nested| {
                    out.append(";");
                    if nested || !tail {
                        out.end_line();
                    }
                });
            }
            TypeBody::Braced => {
                self.decl.render_head(out, &signature, |out, _| {
                    out.end_line();
                });
                out.append_line("{");
                {
                    let mut inner = out.indent_in(1);
                    render_sequence(&self.members, &mut inner, false, Spacing::Members);
                }
                if tail {
                    out.append("}");
                } else {
                    out.append_line("}");
                }
            }
        }
    }
}

/// How a method body is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MethodBody {
    /// A brace block of statements.
    #[default]
    Block,
    /// `=> expression;`
    Arrow,
    /// No body, just `;` (abstract and interface members).
    Abstract,
}

/// A method, constructor, property or local function declaration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MethodDecl {
    pub decl: Declaration,
    pub style: MethodBody,
    pub body: CodeBlock,
}

impl MethodDecl {
    pub fn new(signature: impl Into<String>) -> Self {
        Self {
            decl: Declaration::new(signature),
            ..Self::default()
        }
    }

    pub fn doc(mut self, doc: DocComment) -> Self {
        self.decl.doc = Some(doc);
        self
    }

    pub fn attribute(mut self, attribute: impl Into<String>) -> Self {
        self.decl.attributes.entries.push(attribute.into());
        self
    }

    pub fn constraint(mut self, constraint: impl Into<String>) -> Self {
        self.decl.constraints.entries.push(constraint.into());
        self
    }

    pub fn arrow(mut self) -> Self {
        self.style = MethodBody::Arrow;
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.style = MethodBody::Abstract;
        self
    }

    /// Add a statement node to the body.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.body.children.push(node.into());
        self
    }
}

impl Renderable for MethodDecl {
    fn render(&self, out: &mut SourceWriter, tail: bool) {
        self.decl.render_preamble(out);
        let signature = &self.decl.signature;

        match self.style {
            MethodBody::Block => {
                self.decl.render_head(out, signature, |out, _| {
                    out.end_line();
                });
                out.append_line("{");
                {
                    let mut inner = out.indent_in(1);
                    self.body.render(&mut inner, false);
                }
                if tail {
                    out.append("}");
                } else {
                    out.append_line("}");
                }
            }
            MethodBody::Arrow => {
                self.decl.render_head(out, signature, |out, nested| {
                    if nested {
                        out.end_line();
                        out.append("=> ");
                    } else {
                        out.append(" => ");
                    }
                    self.body.render(out, true);
                    out.append(";");
                    if nested || !tail {
                        out.end_line();
                    }
                });
            }
            MethodBody::Abstract => {
                self.decl.render_head(out, signature, |out, nested| {
                    out.append(";");
                    if nested || !tail {
                        out.end_line();
                    }
                });
            }
        }
    }
}
