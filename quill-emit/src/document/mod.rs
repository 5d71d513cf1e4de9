//! Root assembly of a generation unit.

mod imports;

pub use imports::Imports;

use crate::{
    BuildScope, EmitConfig, Error, NamespaceStyle, Newline, Result, SourceWriter,
    node::{Node, Spacing, render_sequence},
    writer::preprocessor_lines,
};

/// One generated source file: imports, an optional wrapping namespace and
/// an ordered list of top-level entries.
///
/// Entries are attached through [`add`](Self::add) or the
/// [`TopLevel`](crate::TopLevel) and [`Separators`](crate::Separators)
/// builder traits. [`render`](Self::render) does not consume the document
/// and always produces the same text for the same tree.
///
/// # Example
///
/// ```
/// use quill_emit::{Document, EmitConfig, Members, Statements, TopLevel};
///
/// let mut doc = Document::new(EmitConfig::default());
/// doc.using("System");
/// doc.type_decl("public static class Program", |ty| {
///     ty.method("public static void Main()", |body| {
///         body.statement("Console.WriteLine(\"hi\");");
///     });
/// });
///
/// assert_eq!(
///     doc.render().unwrap(),
///     "using System;\n\npublic static class Program\n{\n    public static void Main()\n    {\n        Console.WriteLine(\"hi\");\n    }\n}\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    config: EmitConfig,
    imports: Imports,
    namespace: Option<String>,
    nodes: Vec<Node>,
}

impl Document {
    pub fn new(config: EmitConfig) -> Self {
        Self {
            config,
            imports: Imports::new(),
            namespace: None,
            nodes: Vec::new(),
        }
    }

    /// Build a document inside an ambient [`BuildScope`].
    ///
    /// Helpers called from `f` can register imports through
    /// [`register_import`](crate::context::register_import) without a
    /// handle to the document; they are merged in when `f` returns.
    pub fn build(config: EmitConfig, f: impl FnOnce(&mut Self)) -> Self {
        let scope = BuildScope::enter(&config);
        let mut document = Self::new(config);
        f(&mut document);
        for namespace in scope.finish() {
            document.using(&namespace);
        }
        document
    }

    pub fn config(&self) -> &EmitConfig {
        &self.config
    }

    pub fn imports(&self) -> &Imports {
        &self.imports
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn namespace_name(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Wrap every top-level entry in `namespace`.
    pub fn namespace(&mut self, name: impl Into<String>) -> &mut Self {
        self.namespace = Some(name.into());
        self
    }

    pub fn using(&mut self, namespace: &str) -> &mut Self {
        self.imports.add_namespace(namespace, self.config.qualify);
        self
    }

    pub fn using_static(&mut self, type_name: &str) -> &mut Self {
        self.imports.add_static(type_name, self.config.qualify);
        self
    }

    pub fn using_alias(&mut self, alias: &str, target: &str) -> &mut Self {
        self.imports.add_alias(alias, target, self.config.qualify);
        self
    }

    /// Append a top-level node.
    pub fn add(&mut self, node: impl Into<Node>) -> &mut Self {
        self.nodes.push(node.into());
        self
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut Vec<Node> {
        &mut self.nodes
    }

    /// Render the document to text.
    ///
    /// Fails on a namespace declaration nested in a document that already
    /// has a namespace, or when a line classifier misbehaves.
    pub fn render(&self) -> Result<String> {
        self.check_namespaces()?;
        tracing::debug!(
            imports = self.imports.len(),
            nodes = self.nodes.len(),
            namespace = self.namespace.as_deref(),
            "rendering document"
        );

        let mut out = SourceWriter::new(self.config.clone());
        if self.config.flush_directives {
            out.set_classifier(preprocessor_lines);
        }
        let mut started = false;

        if let Some(pragma) = &self.config.pragma {
            out.append_line(pragma);
            started = true;
        }

        let imports = self.imports.lines();
        if !imports.is_empty() {
            if started {
                out.blank_line();
            }
            for line in &imports {
                out.append_line(line);
            }
            started = true;
        }

        if started {
            out.blank_line();
        }
        match (&self.namespace, self.config.namespace_style) {
            (None, _) => render_sequence(&self.nodes, &mut out, false, Spacing::Entries),
            (Some(name), NamespaceStyle::FileScoped) => {
                out.append_line(&format!("namespace {name};"));
                out.blank_line();
                render_sequence(&self.nodes, &mut out, false, Spacing::Entries);
            }
            (Some(name), NamespaceStyle::Block) => {
                out.append_line(&format!("namespace {name}"));
                out.append_line("{");
                {
                    let mut inner = out.indent_in(1);
                    render_sequence(&self.nodes, &mut inner, false, Spacing::Entries);
                }
                out.append_line("}");
            }
        }

        let text = normalize(&out.finish()?, &self.config);
        tracing::debug!(bytes = text.len(), "rendered document");
        Ok(text)
    }

    fn check_namespaces(&self) -> Result<()> {
        let Some(current) = &self.namespace else {
            return Ok(());
        };
        match self.nodes.iter().find_map(|node| match node {
            Node::Namespace(decl) => Some(decl),
            _ => None,
        }) {
            Some(decl) => Err(Error::NestedNamespace {
                name: decl.name.clone(),
                current: current.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// Unify line endings, trim the end and apply the trailing newline policy.
fn normalize(text: &str, config: &EmitConfig) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut text = unified.trim_end().to_string();
    if text.is_empty() {
        return text;
    }
    if config.trailing_newline {
        text.push('\n');
    }
    match config.newline {
        Newline::Lf => text,
        Newline::CrLf => text.replace('\n', "\r\n"),
    }
}
