use super::{Annotated, Members, TopLevel};
use crate::{Declaration, DocComment, NamespaceDecl, Node, TypeDecl};

/// Builder for a [`TypeDecl`].
#[derive(Debug, Clone)]
pub struct TypeBuilder {
    decl: TypeDecl,
}

impl TypeBuilder {
    pub fn new(signature: impl Into<String>) -> Self {
        Self {
            decl: TypeDecl::new(signature),
        }
    }

    /// Add a base class or implemented interface.
    pub fn base(&mut self, base: impl Into<String>) -> &mut Self {
        self.decl.bases.push(base.into());
        self
    }

    /// End the declaration with `;` instead of a member block.
    pub fn terminated(&mut self) -> &mut Self {
        self.decl.body = crate::TypeBody::Terminated;
        self
    }

    pub fn finish(self) -> TypeDecl {
        self.decl
    }
}

impl Members for TypeBuilder {
    fn push_member(&mut self, node: Node) {
        self.decl.members.push(node);
    }
}

impl Annotated for TypeBuilder {
    fn declaration(&mut self) -> &mut Declaration {
        &mut self.decl.decl
    }
}

/// Builder for a [`NamespaceDecl`].
#[derive(Debug, Clone)]
pub struct NamespaceBuilder {
    decl: NamespaceDecl,
}

impl NamespaceBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            decl: NamespaceDecl::new(name),
        }
    }

    pub fn finish(self) -> NamespaceDecl {
        self.decl
    }
}

impl TopLevel for NamespaceBuilder {
    fn push_entry(&mut self, node: Node) {
        self.decl.entries.push(node);
    }
}

/// Builder for a [`DocComment`].
#[derive(Debug, Clone, Default)]
pub struct DocBuilder {
    comment: DocComment,
}

impl DocBuilder {
    pub fn from_comment(comment: DocComment) -> Self {
        Self { comment }
    }

    pub fn summary(&mut self, text: impl Into<String>) -> &mut Self {
        self.comment.summary = Some(text.into());
        self
    }

    pub fn type_param(&mut self, name: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.comment.type_params.push((name.into(), text.into()));
        self
    }

    pub fn param(&mut self, name: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.comment.params.push((name.into(), text.into()));
        self
    }

    pub fn returns(&mut self, text: impl Into<String>) -> &mut Self {
        self.comment.returns = Some(text.into());
        self
    }

    pub fn remarks(&mut self, text: impl Into<String>) -> &mut Self {
        self.comment.remarks = Some(text.into());
        self
    }

    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.comment.trailer.push(text.into());
        self
    }

    pub fn finish(self) -> DocComment {
        self.comment
    }
}
