//! Manifest types and parsing for quill.toml / quill.json files.

mod file;
mod parse;
mod validate;

use std::{collections::BTreeMap, path::PathBuf};

pub use file::ManifestFile;
pub use parse::{Format, parse_manifest};
use quill_emit::EmitConfig;
use serde::Deserialize;
pub use validate::ParseContext;

/// Root manifest: one generated C# document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Manifest {
    /// Document-level namespace
    pub namespace: Option<String>,

    /// Where `quill render` writes the document, relative to the manifest
    pub output: Option<PathBuf>,

    /// Directory of `*.tmpl` snippet templates, relative to the manifest
    pub templates: Option<PathBuf>,

    #[serde(default)]
    pub usings: Vec<String>,

    #[serde(default)]
    pub static_usings: Vec<String>,

    /// `using Alias = Target;` directives
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,

    /// Template values shared by every snippet
    #[serde(default)]
    pub values: BTreeMap<String, String>,

    /// Emission settings
    #[serde(default)]
    pub document: EmitConfig,

    #[serde(default)]
    pub types: Vec<TypeSpec>,

    #[serde(default)]
    pub snippets: Vec<Snippet>,
}

impl Manifest {
    /// Number of type declarations, nested ones included.
    pub fn type_count(&self) -> usize {
        self.types.iter().map(TypeSpec::type_count).sum()
    }

    /// Number of methods across all types.
    pub fn method_count(&self) -> usize {
        self.types.iter().map(TypeSpec::method_count).sum()
    }
}

/// A type declaration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TypeSpec {
    pub name: String,

    #[serde(default)]
    pub kind: TypeKind,

    #[serde(default = "default_modifiers")]
    pub modifiers: Vec<String>,

    /// Generic type parameters
    #[serde(default)]
    pub generics: Vec<String>,

    /// Primary constructor parameter list, without parentheses
    pub parameters: Option<String>,

    #[serde(default)]
    pub bases: Vec<String>,

    #[serde(default)]
    pub attributes: Vec<String>,

    #[serde(default)]
    pub constraints: Vec<String>,

    /// `<summary>` documentation
    pub summary: Option<String>,

    /// Field, property and enum member lines, written as given
    #[serde(default)]
    pub members: Vec<String>,

    #[serde(default)]
    pub methods: Vec<MethodSpec>,

    /// Nested type declarations
    #[serde(default)]
    pub types: Vec<TypeSpec>,
}

impl TypeSpec {
    fn type_count(&self) -> usize {
        1 + self.types.iter().map(TypeSpec::type_count).sum::<usize>()
    }

    fn method_count(&self) -> usize {
        self.methods.len() + self.types.iter().map(TypeSpec::method_count).sum::<usize>()
    }

    /// Records with a primary constructor and nothing else end in `;`.
    pub fn is_terminated(&self) -> bool {
        self.parameters.is_some()
            && matches!(self.kind, TypeKind::Record | TypeKind::RecordStruct)
            && self.members.is_empty()
            && self.methods.is_empty()
            && self.types.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
    Struct,
    Record,
    RecordStruct,
    Enum,
}

impl TypeKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Struct => "struct",
            Self::Record => "record",
            Self::RecordStruct => "record struct",
            Self::Enum => "enum",
        }
    }

    pub fn has_primary_constructor(&self) -> bool {
        !matches!(self, Self::Interface | Self::Enum)
    }
}

/// A method, constructor or property with a body.
///
/// A method named like its enclosing type is a constructor and has no
/// return type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct MethodSpec {
    pub name: String,

    #[serde(default = "default_returns")]
    pub returns: String,

    #[serde(default = "default_modifiers")]
    pub modifiers: Vec<String>,

    #[serde(default)]
    pub generics: Vec<String>,

    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,

    #[serde(default)]
    pub attributes: Vec<String>,

    #[serde(default)]
    pub constraints: Vec<String>,

    pub summary: Option<String>,

    /// `<returns>` documentation
    pub returns_doc: Option<String>,

    /// Statements of a block body
    #[serde(default)]
    pub body: Vec<String>,

    /// Expression of an `=>` body
    pub arrow: Option<String>,

    /// Declaration without a body
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ParameterSpec {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,

    /// Default value expression
    pub default: Option<String>,

    /// `<param>` documentation
    pub doc: Option<String>,
}

/// Free-standing top-level text, given inline or rendered from a template.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Snippet {
    pub raw: Option<String>,

    /// Template id (file stem in the templates directory)
    pub template: Option<String>,

    /// Values for this snippet; override the manifest-wide values
    #[serde(default)]
    pub values: BTreeMap<String, String>,

    #[serde(default)]
    pub placement: Placement,
}

/// Where a snippet goes relative to the type declarations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    Before,
    #[default]
    After,
}

fn default_modifiers() -> Vec<String> {
    vec!["public".to_string()]
}

fn default_returns() -> String {
    "void".to_string()
}
