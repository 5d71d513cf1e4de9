use std::path::{Path, PathBuf};

use quill_core::TemplateRegistry;
use quill_emit::Document;

use super::{Format, Manifest, parse_manifest};
use crate::{Error, Result, lower};

/// A manifest file on disk with both raw content and parsed manifest.
///
/// Relative `output` and `templates` paths resolve against the directory
/// holding the manifest.
#[derive(Debug)]
pub struct ManifestFile {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl ManifestFile {
    /// Open and parse a manifest; `.json` files are read as JSON.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = parse_manifest(&content, &filename, Format::from_path(&path))?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new("."))
    }

    /// The configured output path, resolved against the manifest directory.
    pub fn output_path(&self) -> Option<PathBuf> {
        self.manifest
            .output
            .as_ref()
            .map(|output| self.base_dir().join(output))
    }

    /// Load the snippet templates, or an empty registry when none are
    /// configured.
    pub fn templates(&self) -> Result<TemplateRegistry> {
        match &self.manifest.templates {
            Some(dir) => TemplateRegistry::from_dir(&self.base_dir().join(dir))
                .map_err(|e| Box::new(Error::from(e))),
            None => Ok(TemplateRegistry::new()),
        }
    }

    /// Lower the manifest into a document.
    pub fn document(&self) -> Result<Document> {
        lower(&self.manifest, &self.templates()?)
    }

    /// Render the document text.
    pub fn render(&self) -> Result<String> {
        self.document()?
            .render()
            .map_err(|e| Box::new(Error::from(e)))
    }
}
