//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

/// Serialization format of a manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Toml,
    Json,
}

impl Format {
    /// `.json` files are JSON, everything else is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "quill.toml", Format::Toml)
    }
}

impl Manifest {
    /// Parse a manifest file, picking the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string(), Format::from_path(path))
    }

    /// Parse a manifest with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str, format: Format) -> Result<Self> {
        parse_manifest(content, filename, format)
    }
}

/// Parse and validate a manifest; `filename` is only used in diagnostics.
pub fn parse_manifest(content: &str, filename: &str, format: Format) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = match format {
        Format::Toml => toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?,
        Format::Json => serde_json::from_str(content).map_err(|e| source_ctx.json_error(e))?,
    };
    ParseContext::new(content, filename).validate_manifest(&manifest)?;

    tracing::debug!(
        filename,
        types = manifest.type_count(),
        snippets = manifest.snippets.len(),
        "parsed manifest"
    );
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Placement, TypeKind};

    #[test]
    fn test_parse_toml() {
        let manifest: Manifest = r#"
namespace = "Acme.Orders"
usings = ["System", "System.Linq"]
static-usings = ["System.Math"]

[aliases]
Id = "System.Guid"

[document]
indent = 2
namespace-style = "file-scoped"

[[types]]
name = "Order"
kind = "record"
parameters = "Id Id, decimal Total"

[[types]]
name = "OrderService"
modifiers = ["public", "sealed"]

[[types.methods]]
name = "Load"
returns = "Order"
parameters = [{ name = "id", type = "Id" }]
arrow = "new(id, 0m)"

[[snippets]]
raw = "// generated"
placement = "before"
"#
        .parse()
        .unwrap();

        assert_eq!(manifest.namespace.as_deref(), Some("Acme.Orders"));
        assert_eq!(manifest.usings, ["System", "System.Linq"]);
        assert_eq!(manifest.aliases["Id"], "System.Guid");
        assert_eq!(manifest.document.indent, quill_emit::Indent::Spaces(2));
        assert_eq!(manifest.types.len(), 2);
        assert_eq!(manifest.types[0].kind, TypeKind::Record);
        assert!(manifest.types[0].is_terminated());
        assert_eq!(manifest.types[1].modifiers, ["public", "sealed"]);
        assert_eq!(manifest.types[1].methods[0].parameters[0].ty, "Id");
        assert_eq!(manifest.method_count(), 1);
        assert_eq!(manifest.snippets[0].placement, Placement::Before);
    }

    #[test]
    fn test_parse_json() {
        let content = r#"{
  "namespace": "Acme",
  "types": [
    { "name": "Clock", "kind": "interface", "methods": [
      { "name": "Now", "returns": "DateTime", "abstract": true, "modifiers": [] }
    ] }
  ]
}"#;
        let manifest = parse_manifest(content, "quill.json", Format::Json).unwrap();
        assert_eq!(manifest.types[0].kind, TypeKind::Interface);
        assert!(manifest.types[0].methods[0].is_abstract);
        assert!(manifest.types[0].methods[0].modifiers.is_empty());
    }

    #[test]
    fn test_defaults() {
        let manifest: Manifest = "[[types]]\nname = \"A\"\n[[types.methods]]\nname = \"Run\"\n"
            .parse()
            .unwrap();
        let method = &manifest.types[0].methods[0];
        assert_eq!(manifest.types[0].kind, TypeKind::Class);
        assert_eq!(method.returns, "void");
        assert_eq!(method.modifiers, ["public"]);
        assert!(manifest.document.trailing_newline);
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = "namespace = ".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { span: Some(_), .. }));
    }

    #[test]
    fn test_unknown_document_key_rejected() {
        let err = "[document]\ntabs = true\n".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_json_parse_error() {
        let err = parse_manifest("{ \"types\": [ }", "quill.json", Format::Json).unwrap_err();
        assert!(matches!(*err, Error::Json { .. }));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("quill.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("QUILL.JSON")), Format::Json);
        assert_eq!(Format::from_path(Path::new("quill.toml")), Format::Toml);
        assert_eq!(Format::from_path(Path::new("manifest")), Format::Toml);
    }
}
