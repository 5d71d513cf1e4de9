//! Indentation-aware source emission for C# code generators.
//!
//! Callers describe structure (namespaces, types, methods, statement blocks,
//! raw text) and the engine takes care of indentation, bracket placement,
//! blank lines and the trailing newline. Emitted text is placed as given and
//! never parsed.
//!
//! # Module Organization
//!
//! - [`writer`] - [`SourceWriter`], the line-buffering writer with scoped indentation
//! - [`node`] - The [`Node`] tree and the [`Renderable`] trait
//! - [`document`] - [`Document`] root assembly and [`Imports`]
//! - [`builder`] - Capability traits and per-context builders
//! - [`context`] - Thread-local [`BuildScope`] for helpers that register imports
//! - [`symbol`] - [`SymbolNamer`] seam for turning type symbols into text
//!
//! # Example
//!
//! ```
//! use quill_emit::{Document, EmitConfig, Members, Statements, TopLevel};
//!
//! let mut doc = Document::new(EmitConfig::default());
//! doc.using("System.Collections.Generic");
//! doc.type_decl("public class Sample", |ty| {
//!     ty.method("public void Run()", |body| {
//!         body.statement("Console.WriteLine(1);");
//!     });
//! });
//!
//! assert_eq!(
//!     doc.render().unwrap(),
//!     "using System.Collections.Generic;\n\npublic class Sample\n{\n    public void Run()\n    {\n        Console.WriteLine(1);\n    }\n}\n"
//! );
//! ```

pub mod builder;
mod config;
pub mod context;
pub mod document;
mod error;
pub mod node;
pub mod symbol;
pub mod writer;

pub use builder::{
    Annotated, BlockBuilder, DocBuilder, Members, MethodBuilder, NamespaceBuilder, Separators,
    Statements, TopLevel, TypeBuilder,
};
pub use config::{EmitConfig, GLOBAL_PREFIX, NamespaceStyle, Newline, Qualify};
pub use context::BuildScope;
pub use document::{Document, Imports};
pub use error::{Error, Result};
pub use node::{
    AttributeList, Brackets, CodeBlock, ConstraintList, Declaration, DocComment, MethodBody,
    MethodDecl, NamespaceDecl, Node, RawMode, RawText, Renderable, Separator, TypeBody, TypeDecl,
};
pub use symbol::{NamedSymbol, QualifiedNamer, SymbolNamer, TypeSymbol, name_in_scope};
pub use writer::{
    Classifier, ClassifierGuard, Indent, IndentGuard, LineClass, LineKind, SourceWriter,
    indent_all, preprocessor_lines,
};
