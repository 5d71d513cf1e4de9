//! The structural node tree.
//!
//! Every node renders itself into a [`SourceWriter`] at the writer's current
//! depth. The `tail` argument of [`Renderable::render`] says whether the node
//! is the last piece of an enclosing expression: a node in tail position
//! leaves its final line open so the parent can glue more text onto it
//! (a `;`, a closing bracket, a footer).

mod block;
mod decl;
mod doc;
mod lists;
mod namespace;
mod raw;

pub use block::{Brackets, CodeBlock};
pub use decl::{Declaration, MethodBody, MethodDecl, TypeBody, TypeDecl};
pub use doc::DocComment;
pub use lists::{AttributeList, ConstraintList};
pub use namespace::NamespaceDecl;
pub use raw::{RawMode, RawText};

use crate::SourceWriter;

/// Something that can write itself into a [`SourceWriter`].
pub trait Renderable {
    /// Render at the writer's current depth.
    ///
    /// With `tail == false` the node ends on a terminated line. With
    /// `tail == true` it may leave its last line open for the caller. The
    /// writer's depth is the same before and after the call.
    fn render(&self, out: &mut SourceWriter, tail: bool);
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn render(&self, out: &mut SourceWriter, tail: bool) {
        (*self).render(out, tail)
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn render(&self, out: &mut SourceWriter, tail: bool) {
        self.as_ref().render(out, tail)
    }
}

/// A blank-line placeholder between siblings.
///
/// Renders nothing by itself. Between two siblings it yields exactly one
/// blank line; at either end of a sequence it is dropped unless forced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Separator {
    pub forced: bool,
}

impl Separator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn forced() -> Self {
        Self { forced: true }
    }
}

/// One structural unit of emitted source.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Raw(RawText),
    Block(CodeBlock),
    Type(TypeDecl),
    Method(MethodDecl),
    Namespace(NamespaceDecl),
    Doc(DocComment),
    Attributes(AttributeList),
    Constraints(ConstraintList),
    Separator(Separator),
}

impl Node {
    /// Type and method declarations get blank lines around them among members.
    pub fn is_declaration(&self) -> bool {
        matches!(self, Self::Type(_) | Self::Method(_))
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, Self::Separator(_))
    }
}

impl Renderable for Node {
    fn render(&self, out: &mut SourceWriter, tail: bool) {
        match self {
            Self::Raw(raw) => raw.render(out, tail),
            Self::Block(block) => block.render(out, tail),
            Self::Type(decl) => decl.render(out, tail),
            Self::Method(decl) => decl.render(out, tail),
            Self::Namespace(decl) => decl.render(out, tail),
            Self::Doc(doc) => doc.render(out, tail),
            Self::Attributes(attrs) => attrs.render(out, tail),
            Self::Constraints(constraints) => constraints.render(out, tail),
            Self::Separator(_) => {}
        }
    }
}

macro_rules! impl_from_node {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_node!(
    Raw(RawText),
    Block(CodeBlock),
    Type(TypeDecl),
    Method(MethodDecl),
    Namespace(NamespaceDecl),
    Doc(DocComment),
    Attributes(AttributeList),
    Constraints(ConstraintList),
    Separator(Separator),
);

/// Where blank lines go between the entries of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Spacing {
    /// Only at separators.
    Statements,
    /// At separators and around type or method declarations.
    Members,
    /// Between every pair of entries.
    Entries,
}

impl Spacing {
    fn separates(self, previous: &Node, next: &Node) -> bool {
        match self {
            Self::Statements => false,
            Self::Members => previous.is_declaration() || next.is_declaration(),
            Self::Entries => true,
        }
    }
}

/// Render a sequence of sibling nodes.
///
/// Only the last non-separator node may receive `tail`; every other node
/// has its line terminated after it renders. Runs of separators collapse
/// into a single blank line.
pub(crate) fn render_sequence(
    nodes: &[Node],
    out: &mut SourceWriter,
    tail: bool,
    spacing: Spacing,
) {
    let last = nodes.iter().rposition(|node| !node.is_separator());
    let mut previous: Option<&Node> = None;
    let mut separated = false;
    let mut forced = false;

    for (index, node) in nodes.iter().enumerate() {
        if let Node::Separator(separator) = node {
            separated = true;
            forced |= separator.forced;
            continue;
        }

        let blank = match previous {
            Some(previous) => separated || spacing.separates(previous, node),
            None => forced,
        };
        if blank {
            out.blank_line();
        }

        let is_tail = tail && Some(index) == last;
        node.render(out, is_tail);
        if !is_tail {
            out.end_line();
        }

        previous = Some(node);
        separated = false;
        forced = false;
    }

    if forced && !tail {
        out.blank_line();
    }
}
