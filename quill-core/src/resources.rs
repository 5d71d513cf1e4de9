//! Template lookup by id.

use std::path::Path;

use indexmap::IndexMap;

use crate::{Error, Result, Template, Values};

/// File extension of templates loaded from a directory.
pub const TEMPLATE_EXTENSION: &str = "tmpl";

/// Templates keyed by id.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: IndexMap<String, Template>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.tmpl` file in `dir`; the id is the file stem.
    ///
    /// Subdirectories are not searched.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
            let path = entry.map_err(|e| Error::io(dir, e))?.path();
            if path.is_file()
                && path.extension().is_some_and(|ext| ext == TEMPLATE_EXTENSION)
            {
                paths.push(path);
            }
        }
        paths.sort();

        let mut registry = Self::new();
        for path in paths {
            let Some(id) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let source = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
            registry.insert(id, source);
        }

        tracing::debug!(
            dir = %dir.display(),
            count = registry.len(),
            "loaded templates"
        );
        Ok(registry)
    }

    /// Add or replace a template.
    pub fn insert(&mut self, id: impl Into<String>, source: impl Into<String>) -> &mut Self {
        self.templates.insert(id.into(), Template::new(source));
        self
    }

    pub fn get(&self, id: &str) -> Result<&Template> {
        self.templates.get(id).ok_or_else(|| Error::UnknownTemplate {
            id: id.to_string(),
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Look up a template and render it.
    pub fn render(&self, id: &str, values: &Values) -> Result<String> {
        self.get(id)?.render(values)
    }
}
