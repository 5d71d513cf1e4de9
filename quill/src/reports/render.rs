//! Render command report data structures.

use std::path::PathBuf;

use quill_core::WriteResult;

use super::output::{Output, Report};

/// Where the rendered document went.
#[derive(Debug)]
pub enum RenderReport {
    /// No output path; the document goes to stdout as-is.
    Stdout { content: String },
    /// `--dry-run`: what would be written.
    Preview { path: PathBuf, content: String },
    Written { path: PathBuf, result: WriteResult },
}

impl Report for RenderReport {
    fn render(&self, out: &mut dyn Output) {
        match self {
            Self::Stdout { content } => out.raw(content),
            Self::Preview { path, content } => {
                out.divider(&path.display().to_string());
                out.raw(content);
            }
            Self::Written { path, result } => {
                let status = match result {
                    WriteResult::Written => "wrote",
                    WriteResult::Unchanged => "unchanged",
                    WriteResult::Skipped => "skipped",
                };
                out.preformatted(&format!("✓ {} {}", status, path.display()));
            }
        }
    }
}
