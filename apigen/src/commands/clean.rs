use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::open_config;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CleanCommand {
    /// Path to apigen.toml (defaults to ./apigen.toml)
    #[arg(short, long, default_value = "apigen.toml")]
    pub config: PathBuf,

    /// Preview what would be deleted without actually deleting
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let config = open_config(&self.config);

        let report = ops::clean(
            &config,
            ops::clean::CleanOptions {
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
