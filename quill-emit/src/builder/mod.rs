//! Fluent construction surface.
//!
//! Each context a node can be attached in has its own builder type, and
//! each kind of attachment is a capability trait implemented only by the
//! builders where it is legal:
//!
//! | Trait | Implemented by |
//! |---|---|
//! | [`TopLevel`] | [`Document`], [`NamespaceBuilder`] |
//! | [`Members`] | [`TypeBuilder`] |
//! | [`Statements`] | [`MethodBuilder`], [`BlockBuilder`] |
//! | [`Separators`] | [`BlockBuilder`], [`Document`] |
//! | [`Annotated`] | [`TypeBuilder`], [`MethodBuilder`] |
//!
//! Nested builders are configured through a callback and the finished node
//! is moved into its parent, so every node has exactly one owner.

mod decl;
mod scope;

pub use decl::{DocBuilder, NamespaceBuilder, TypeBuilder};
pub use scope::{BlockBuilder, MethodBuilder};

use crate::{Brackets, CodeBlock, Declaration, Document, Node, RawText, Separator};

/// Contexts that hold type declarations and free-standing text.
pub trait TopLevel {
    /// Attach a finished node.
    fn push_entry(&mut self, node: Node);

    /// Add a type declaration configured by `f`.
    fn type_decl(
        &mut self,
        signature: impl Into<String>,
        f: impl FnOnce(&mut TypeBuilder),
    ) -> &mut Self {
        let mut builder = TypeBuilder::new(signature);
        f(&mut builder);
        self.push_entry(builder.finish().into());
        self
    }

    /// Add indented raw text.
    fn raw(&mut self, text: impl Into<String>) -> &mut Self {
        self.push_entry(RawText::new(text).into());
        self
    }
}

/// Type bodies.
pub trait Members {
    fn push_member(&mut self, node: Node);

    fn nested_type(
        &mut self,
        signature: impl Into<String>,
        f: impl FnOnce(&mut TypeBuilder),
    ) -> &mut Self {
        let mut builder = TypeBuilder::new(signature);
        f(&mut builder);
        self.push_member(builder.finish().into());
        self
    }

    fn method(
        &mut self,
        signature: impl Into<String>,
        f: impl FnOnce(&mut MethodBuilder),
    ) -> &mut Self {
        let mut builder = MethodBuilder::new(signature);
        f(&mut builder);
        self.push_member(builder.finish().into());
        self
    }

    /// A field, property or other single member line.
    fn member(&mut self, text: impl Into<String>) -> &mut Self {
        self.push_member(RawText::new(text).into());
        self
    }

    /// Member text written verbatim, without indentation.
    fn raw_member(&mut self, text: impl Into<String>) -> &mut Self {
        self.push_member(RawText::verbatim(text).into());
        self
    }
}

/// Statement sequences.
pub trait Statements {
    fn push_statement(&mut self, node: Node);

    fn statement(&mut self, text: impl Into<String>) -> &mut Self {
        self.push_statement(RawText::new(text).into());
        self
    }

    /// Statement text written verbatim, without indentation.
    fn raw_statement(&mut self, text: impl Into<String>) -> &mut Self {
        self.push_statement(RawText::verbatim(text).into());
        self
    }

    /// `header` followed by a brace block.
    fn scope(
        &mut self,
        header: impl Into<String>,
        f: impl FnOnce(&mut BlockBuilder),
    ) -> &mut Self {
        let mut builder = BlockBuilder::from_block(CodeBlock::braced(header));
        f(&mut builder);
        self.push_statement(builder.finish().into());
        self
    }

    /// `header` followed by a block wrapped in `brackets`.
    fn scope_with(
        &mut self,
        header: impl Into<String>,
        brackets: Brackets,
        f: impl FnOnce(&mut BlockBuilder),
    ) -> &mut Self {
        let block = CodeBlock::new().header(header).brackets(brackets);
        let mut builder = BlockBuilder::from_block(block);
        f(&mut builder);
        self.push_statement(builder.finish().into());
        self
    }

    /// A bare block whose shape is set entirely by `f`.
    fn block(&mut self, f: impl FnOnce(&mut BlockBuilder)) -> &mut Self {
        let mut builder = BlockBuilder::new();
        f(&mut builder);
        self.push_statement(builder.finish().into());
        self
    }
}

/// Blank-line placeholders between siblings.
pub trait Separators {
    fn push_separator(&mut self, separator: Separator);

    /// One blank line between the neighbours, nothing at either end.
    fn separator(&mut self) -> &mut Self {
        self.push_separator(Separator::new());
        self
    }

    /// One blank line, kept even at the start or end of a sequence.
    fn forced_separator(&mut self) -> &mut Self {
        self.push_separator(Separator::forced());
        self
    }
}

/// Declarations that carry doc comments, attributes and constraints.
pub trait Annotated {
    fn declaration(&mut self) -> &mut Declaration;

    fn doc(&mut self, f: impl FnOnce(&mut DocBuilder)) -> &mut Self {
        let declaration = self.declaration();
        let mut builder = DocBuilder::from_comment(declaration.doc.take().unwrap_or_default());
        f(&mut builder);
        declaration.doc = Some(builder.finish());
        self
    }

    /// Add an attribute, with or without its surrounding brackets.
    fn attribute(&mut self, attribute: impl Into<String>) -> &mut Self {
        self.declaration().attributes.entries.push(attribute.into());
        self
    }

    /// Add a generic constraint clause such as `T : class`.
    fn constraint(&mut self, constraint: impl Into<String>) -> &mut Self {
        self.declaration().constraints.entries.push(constraint.into());
        self
    }
}

impl TopLevel for Document {
    fn push_entry(&mut self, node: Node) {
        self.nodes_mut().push(node);
    }
}

impl Separators for Document {
    fn push_separator(&mut self, separator: Separator) {
        self.nodes_mut().push(separator.into());
    }
}

impl Document {
    /// Add a `namespace` declaration. Only documents without a
    /// document-level namespace can render these.
    pub fn namespace_decl(
        &mut self,
        name: impl Into<String>,
        f: impl FnOnce(&mut NamespaceBuilder),
    ) -> &mut Self {
        let mut builder = NamespaceBuilder::new(name);
        f(&mut builder);
        self.add(builder.finish())
    }
}
