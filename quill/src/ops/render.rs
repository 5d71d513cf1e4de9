//! Render operation - writing the document.

use std::path::Path;

use eyre::{Context, Result};
use quill_core::File;
use quill_manifest::ManifestFile;

use crate::reports::RenderReport;

/// Deliver rendered `text` to `output`, the manifest's output path or
/// stdout, in that order of preference. `dry_run` never touches disk.
pub fn render(
    file: &ManifestFile,
    text: String,
    output: Option<&Path>,
    dry_run: bool,
) -> Result<RenderReport> {
    let target = output.map(Path::to_path_buf).or_else(|| file.output_path());

    let Some(path) = target else {
        return Ok(RenderReport::Stdout { content: text });
    };

    if dry_run {
        return Ok(RenderReport::Preview {
            path,
            content: text,
        });
    }

    let result = File::new(&path, text)
        .write()
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), ?result, "rendered document");

    Ok(RenderReport::Written { path, result })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use quill_core::WriteResult;
    use tempfile::TempDir;

    use super::*;

    fn manifest(dir: &Path, extra: &str) -> ManifestFile {
        let path = dir.join("quill.toml");
        fs::write(&path, format!("{extra}[[types]]\nname = \"Ping\"\n")).unwrap();
        ManifestFile::open(path).unwrap()
    }

    #[test]
    fn test_writes_manifest_output() {
        let temp = TempDir::new().unwrap();
        let file = manifest(temp.path(), "output = \"Gen/Ping.cs\"\n");
        let text = file.render().unwrap();

        let report = render(&file, text.clone(), None, false).unwrap();
        let target = temp.path().join("Gen/Ping.cs");
        assert!(matches!(
            report,
            RenderReport::Written { ref path, result: WriteResult::Written } if path == &target
        ));
        assert_eq!(fs::read_to_string(&target).unwrap(), text);

        let again = render(&file, text, None, false).unwrap();
        assert!(matches!(
            again,
            RenderReport::Written { result: WriteResult::Unchanged, .. }
        ));
    }

    #[test]
    fn test_output_flag_wins() {
        let temp = TempDir::new().unwrap();
        let file = manifest(temp.path(), "output = \"Gen/Ping.cs\"\n");
        let explicit = temp.path().join("Other.cs");

        render(&file, file.render().unwrap(), Some(&explicit), false).unwrap();
        assert!(explicit.exists());
        assert!(!temp.path().join("Gen/Ping.cs").exists());
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let temp = TempDir::new().unwrap();
        let file = manifest(temp.path(), "output = \"Ping.cs\"\n");

        let report = render(&file, file.render().unwrap(), None, true).unwrap();
        assert!(matches!(report, RenderReport::Preview { .. }));
        assert!(!temp.path().join("Ping.cs").exists());
    }

    #[test]
    fn test_without_output_goes_to_stdout() {
        let temp = TempDir::new().unwrap();
        let file = manifest(temp.path(), "");

        let report = render(&file, "x\n".to_string(), None, false).unwrap();
        assert!(matches!(report, RenderReport::Stdout { ref content } if content == "x\n"));
    }
}
