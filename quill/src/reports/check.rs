//! Check command report data structures.

use std::path::PathBuf;

use serde::Serialize;

use super::output::{Output, Report};

/// Summary of a valid manifest.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub namespace: Option<String>,
    /// `using`, `using static` and alias directives.
    pub imports: usize,
    pub types: usize,
    pub methods: usize,
    pub snippets: usize,
    /// Resolved output path, if the manifest names one.
    pub output: Option<PathBuf>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        out.key_value_indented("namespace", self.namespace.as_deref().unwrap_or("(none)"));
        out.key_value_indented("imports", &self.imports.to_string());
        out.key_value_indented("types", &self.types.to_string());
        out.key_value_indented("methods", &self.methods.to_string());
        out.key_value_indented("snippets", &self.snippets.to_string());

        let output = self
            .output
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "stdout".to_string());
        out.key_value_indented("output", &output);
    }
}
