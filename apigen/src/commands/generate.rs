use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::open_config;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to apigen.toml (defaults to ./apigen.toml)
    #[arg(short, long, default_value = "apigen.toml")]
    pub config: PathBuf,

    /// Preview generated artifacts without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let config = open_config(&self.config);

        let report = ops::generate(
            &config,
            ops::generate::GenerateOptions {
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
