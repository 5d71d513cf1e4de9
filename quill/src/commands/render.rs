use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use quill_manifest::ManifestFile;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct RenderCommand {
    /// Path to the manifest (defaults to ./quill.toml)
    #[arg(short, long, default_value = "quill.toml")]
    pub config: PathBuf,

    /// Output file (defaults to the manifest's `output`, else stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview the rendered document without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl RenderCommand {
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();
        let text = file.render().unwrap_or_exit();

        let report = ops::render(&file, text, self.output.as_deref(), self.dry_run)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
