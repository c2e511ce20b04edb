use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};

use super::open_config;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InfoCommand {
    /// Path to apigen.toml (defaults to ./apigen.toml)
    #[arg(short, long, default_value = "apigen.toml")]
    pub config: PathBuf,

    /// Print the information as JSON
    #[arg(long)]
    pub json: bool,
}

impl InfoCommand {
    pub fn run(&self) -> Result<()> {
        let config = open_config(&self.config);
        let report = ops::info(&config);

        if self.json {
            let json = serde_json::to_string_pretty(&report).wrap_err("Failed to encode info")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
