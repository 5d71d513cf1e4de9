//! Declarative C# document manifests.
//!
//! A manifest (`quill.toml`, or `quill.json`) names the namespace, imports,
//! types, methods and free-standing snippets of one generated document.
//! Parsing reports `miette` diagnostics pointing into the manifest source;
//! [`lower`] turns a parsed manifest into a [`quill_emit::Document`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod lower;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use lower::lower;
pub use manifest::{
    Format, Manifest, ManifestFile, MethodSpec, ParameterSpec, ParseContext, Placement, Snippet,
    TypeKind, TypeSpec, parse_manifest,
};
