//! Emission settings shared by the writer, the node tree and the document.

use serde::Deserialize;

use crate::writer::Indent;

/// Marker that fully qualifies a namespace reference.
pub const GLOBAL_PREFIX: &str = "global::";

/// Line terminator written between lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Newline {
    #[default]
    Lf,
    CrLf,
}

impl Newline {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// How namespace arguments of import directives are qualified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Qualify {
    /// Keep whatever the caller passed.
    #[default]
    Unchanged,
    /// Always carry the `global::` marker.
    Always,
    /// Never carry the `global::` marker.
    Never,
}

impl Qualify {
    /// Apply the qualification policy to a namespace or type name.
    pub fn apply(&self, name: &str) -> String {
        let bare = name.strip_prefix(GLOBAL_PREFIX).unwrap_or(name);
        match self {
            Self::Unchanged => name.to_string(),
            Self::Always => format!("{GLOBAL_PREFIX}{bare}"),
            Self::Never => bare.to_string(),
        }
    }
}

/// How the document-level namespace wraps the top-level entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamespaceStyle {
    /// `namespace X` followed by a brace block.
    #[default]
    Block,
    /// `namespace X;` followed by unindented entries.
    FileScoped,
}

/// Configuration for one generation unit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct EmitConfig {
    /// Indentation unit per nesting level.
    pub indent: Indent,
    /// Line terminator.
    pub newline: Newline,
    /// Whether the rendered document ends with exactly one newline.
    pub trailing_newline: bool,
    /// Qualification policy for import directives.
    pub qualify: Qualify,
    /// Form of the document-level namespace.
    pub namespace_style: NamespaceStyle,
    /// Optional first line of the document (e.g. `#nullable enable`).
    pub pragma: Option<String>,
    /// Prefix of documentation comment lines.
    pub doc_prefix: String,
    /// Write preprocessor directives (`#if`, `#region`) at column zero.
    pub flush_directives: bool,
}

impl EmitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn newline(mut self, newline: Newline) -> Self {
        self.newline = newline;
        self
    }

    pub fn trailing_newline(mut self, enabled: bool) -> Self {
        self.trailing_newline = enabled;
        self
    }

    pub fn qualify(mut self, qualify: Qualify) -> Self {
        self.qualify = qualify;
        self
    }

    pub fn namespace_style(mut self, style: NamespaceStyle) -> Self {
        self.namespace_style = style;
        self
    }

    pub fn pragma(mut self, pragma: impl Into<String>) -> Self {
        self.pragma = Some(pragma.into());
        self
    }

    pub fn doc_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.doc_prefix = prefix.into();
        self
    }

    pub fn flush_directives(mut self, enabled: bool) -> Self {
        self.flush_directives = enabled;
        self
    }
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            indent: Indent::default(),
            newline: Newline::default(),
            trailing_newline: true,
            qualify: Qualify::default(),
            namespace_style: NamespaceStyle::default(),
            pragma: None,
            doc_prefix: "///".to_string(),
            flush_directives: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualify_apply() {
        assert_eq!(Qualify::Unchanged.apply("System"), "System");
        assert_eq!(Qualify::Unchanged.apply("global::System"), "global::System");
        assert_eq!(Qualify::Always.apply("System"), "global::System");
        assert_eq!(Qualify::Always.apply("global::System"), "global::System");
        assert_eq!(Qualify::Never.apply("global::System.IO"), "System.IO");
    }

    #[test]
    fn test_deserialize_config() {
        let config: EmitConfig = serde_json::from_str(
            r##"{
                "indent": "tab",
                "newline": "crlf",
                "trailing-newline": false,
                "qualify": "always",
                "namespace-style": "file-scoped",
                "pragma": "#nullable enable"
            }"##,
        )
        .unwrap();

        assert_eq!(config.indent, Indent::Tab);
        assert_eq!(config.newline, Newline::CrLf);
        assert!(!config.trailing_newline);
        assert_eq!(config.qualify, Qualify::Always);
        assert_eq!(config.namespace_style, NamespaceStyle::FileScoped);
        assert_eq!(config.pragma.as_deref(), Some("#nullable enable"));
        assert_eq!(config.doc_prefix, "///");
        assert!(config.flush_directives);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(serde_json::from_str::<EmitConfig>(r#"{ "tabs": true }"#).is_err());
    }
}
