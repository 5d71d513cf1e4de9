//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;
use quill_core::is_keyword;

use super::{Manifest, MethodSpec, TypeSpec};
use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Holds the source content, the filename and the current path through the
/// manifest (`OrderService.Load`) so nested checks can report where they
/// failed.
///
/// ```ignore
/// let ctx = ParseContext::new(src, "quill.toml");
/// ctx.validate_name("OrderService", "type")?;
///
/// let nested = ctx.push("OrderService");
/// nested.validate_name("Load", "method")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: Arc<SourceContext>,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// For example `method in 'OrderService'`, or just `method` at the root.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Validate a declared name: a C# identifier that is not a reserved
    /// keyword unless escaped with `@`.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }
        self.validate_identifier(name, kind)
    }

    /// Validate identifier syntax only. Keywords are accepted; callers
    /// escape them.
    pub fn validate_identifier(&self, name: &str, kind: &str) -> Result<()> {
        match validate_identifier(name) {
            Some(reason) => Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            )),
            None => Ok(()),
        }
    }

    pub fn validate_manifest(&self, manifest: &'a Manifest) -> Result<()> {
        if let Some(namespace) = &manifest.namespace {
            self.validate_namespace(namespace)?;
        }

        for ty in &manifest.types {
            self.validate_type(ty)?;
        }

        for (index, snippet) in manifest.snippets.iter().enumerate() {
            match (&snippet.raw, &snippet.template) {
                (Some(_), None) | (None, Some(_)) => {}
                (Some(_), Some(_)) => {
                    return Err(self.source.validation_error(format!(
                        "snippet {} sets both 'raw' and 'template'",
                        index + 1
                    )));
                }
                (None, None) => {
                    return Err(self.source.validation_error(format!(
                        "snippet {} needs either 'raw' or 'template'",
                        index + 1
                    )));
                }
            }
        }

        Ok(())
    }

    fn validate_namespace(&self, namespace: &str) -> Result<()> {
        let bare = namespace.strip_prefix(quill_emit::GLOBAL_PREFIX).unwrap_or(namespace);
        for segment in bare.split('.') {
            self.validate_name(segment, "namespace")?;
        }
        Ok(())
    }

    fn validate_type(&self, ty: &'a TypeSpec) -> Result<()> {
        self.validate_name(&ty.name, "type")?;
        let ctx = self.push(&ty.name);

        for generic in &ty.generics {
            ctx.validate_name(generic, "type parameter")?;
        }
        if ty.parameters.is_some() && !ty.kind.has_primary_constructor() {
            return Err(self.source.validation_error_at(
                format!("{} '{}' cannot have a primary constructor", ty.kind.keyword(), ty.name),
                self.find_span(&ty.name),
            ));
        }

        for method in &ty.methods {
            ctx.validate_method(method)?;
        }
        for nested in &ty.types {
            ctx.validate_type(nested)?;
        }
        Ok(())
    }

    fn validate_method(&self, method: &'a MethodSpec) -> Result<()> {
        self.validate_name(&method.name, "method")?;
        let ctx = self.push(&method.name);

        for generic in &method.generics {
            ctx.validate_name(generic, "type parameter")?;
        }
        for parameter in &method.parameters {
            ctx.validate_identifier(&parameter.name, "parameter")?;
        }

        let bodies = [
            !method.body.is_empty(),
            method.arrow.is_some(),
            method.is_abstract,
        ];
        if bodies.iter().filter(|set| **set).count() > 1 {
            return Err(self.source.validation_error_at(
                format!(
                    "method '{}' must use only one of 'body', 'arrow' and 'abstract'",
                    ctx.path_string()
                ),
                self.find_span(&method.name),
            ));
        }
        Ok(())
    }
}

/// Find the span of a declared name in TOML or JSON source.
///
/// Tries `name = "X"` assignments first, then any quoted occurrence.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let patterns = [
        format!("name = \"{name}\""),
        format!("name = '{name}'"),
        format!("name=\"{name}\""),
        format!("\"name\": \"{name}\""),
        format!("\"name\":\"{name}\""),
    ];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            // The name sits just before the closing quote.
            let start = pos + pattern.len() - name.len() - 1;
            return Some(SourceSpan::from((start, name.len())));
        }
    }

    // Namespaces and other plain string values.
    for quoted in [format!("\"{name}\""), format!("'{name}'")] {
        if let Some(pos) = src.find(quoted.as_str()) {
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }
    None
}

/// Check C# identifier syntax. Returns `Some(reason)` when invalid.
///
/// A leading `@` (verbatim identifier) is allowed.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let bare = name.strip_prefix('@').unwrap_or(name);
    let mut chars = bare.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_alphabetic() || c == '_' => {}
        Some(c) if c.is_numeric() => return Some("name cannot start with a digit"),
        Some(_) => return Some("name must start with a letter or underscore"),
    }

    if chars.any(|c| !(c.is_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Manifest};

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("Order").is_none());
        assert!(validate_identifier("_cache").is_none());
        assert!(validate_identifier("Item2").is_none());
        assert!(validate_identifier("@class").is_none());
        assert!(validate_identifier("Größe").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert_eq!(validate_identifier(""), Some("name cannot be empty"));
        assert_eq!(validate_identifier("@"), Some("name cannot be empty"));
        assert_eq!(validate_identifier("2fa"), Some("name cannot start with a digit"));
        assert_eq!(
            validate_identifier("-x"),
            Some("name must start with a letter or underscore")
        );
        assert_eq!(
            validate_identifier("order-id"),
            Some("name must contain only letters, numbers, and underscores")
        );
    }

    #[test]
    fn test_find_name_span() {
        let src = "[[types]]\nname = \"Order\"\n";
        let span = find_name_span(src, "Order").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "Order");

        let json = "{ \"name\": \"Order\" }";
        let span = find_name_span(json, "Order").unwrap();
        assert_eq!(&json[span.offset()..span.offset() + span.len()], "Order");

        assert!(find_name_span(src, "Missing").is_none());
    }

    #[test]
    fn test_context_for() {
        let ctx = ParseContext::new("", "quill.toml");
        assert_eq!(ctx.context_for("type"), "type");
        let nested = ctx.push("Orders").push("Load");
        assert_eq!(nested.context_for("parameter"), "parameter in 'Orders.Load'");
    }

    #[test]
    fn test_reserved_type_name() {
        let err = "[[types]]\nname = \"class\"\n".parse::<Manifest>().unwrap_err();
        match *err {
            Error::ReservedKeyword { name, context, span, .. } => {
                assert_eq!(name, "class");
                assert_eq!(context, "type");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_escaped_keyword_is_accepted() {
        assert!("[[types]]\nname = \"@class\"\n".parse::<Manifest>().is_ok());
    }

    #[test]
    fn test_invalid_method_name_has_context() {
        let src = "[[types]]\nname = \"Orders\"\n[[types.methods]]\nname = \"load-all\"\n";
        let err = src.parse::<Manifest>().unwrap_err();
        match *err {
            Error::InvalidIdentifier { context, .. } => {
                assert_eq!(context, "method in 'Orders'");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_keyword_parameter_is_accepted() {
        let src = "[[types]]\nname = \"Bus\"\n[[types.methods]]\nname = \"Raise\"\nparameters = [{ name = \"event\", type = \"string\" }]\n";
        assert!(src.parse::<Manifest>().is_ok());
    }

    #[test]
    fn test_conflicting_bodies() {
        let src = "[[types]]\nname = \"A\"\n[[types.methods]]\nname = \"Run\"\nbody = [\"x();\"]\narrow = \"y()\"\n";
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Validation { span: Some(_), .. }));
        assert!(err.to_string().contains("'A.Run'"));
    }

    #[test]
    fn test_namespace_segments() {
        assert!("namespace = \"global::Acme.Orders\"".parse::<Manifest>().is_ok());
        let err = "namespace = \"Acme.namespace\"".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { .. }));
    }

    #[test]
    fn test_snippet_needs_one_source() {
        let err = "[[snippets]]\nplacement = \"before\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert_eq!(err.to_string(), "snippet 1 needs either 'raw' or 'template'");

        let err = "[[snippets]]\nraw = \"// a\"\ntemplate = \"header\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert_eq!(err.to_string(), "snippet 1 sets both 'raw' and 'template'");
    }

    #[test]
    fn test_primary_constructor_on_enum() {
        let src = "[[types]]\nname = \"Color\"\nkind = \"enum\"\nparameters = \"int x\"\n";
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }
}
