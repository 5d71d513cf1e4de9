//! Check operation - manifest summary.

use quill_manifest::ManifestFile;

use crate::reports::CheckReport;

/// Summarize a manifest that parsed and lowered cleanly.
pub fn check(file: &ManifestFile) -> CheckReport {
    let manifest = file.manifest();
    CheckReport {
        config_path: file.path().to_path_buf(),
        namespace: manifest.namespace.clone(),
        imports: manifest.usings.len() + manifest.static_usings.len() + manifest.aliases.len(),
        types: manifest.type_count(),
        methods: manifest.method_count(),
        snippets: manifest.snippets.len(),
        output: file.output_path(),
    }
}
