use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use quill_manifest::ManifestFile;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the manifest (defaults to ./quill.toml)
    #[arg(short, long, default_value = "quill.toml")]
    pub config: PathBuf,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();
        // Lowering also reports unknown templates.
        file.render().unwrap_or_exit();

        let report = ops::check(&file);
        if self.json {
            let json = serde_json::to_string_pretty(&report)
                .wrap_err("Failed to serialize check report")?;
            println!("{json}");
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
