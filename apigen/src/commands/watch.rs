use std::path::PathBuf;

use apigen_codegen::ReconcileOutcome;
use clap::Args;
use eyre::{Context, Result};
use tracing::{error, info};

use super::open_config;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
    watcher::ServiceWatcher,
};

#[derive(Args)]
pub struct WatchCommand {
    /// Path to apigen.toml (defaults to ./apigen.toml)
    #[arg(short, long, default_value = "apigen.toml")]
    pub config: PathBuf,
}

impl WatchCommand {
    pub fn run(&self) -> Result<()> {
        let config = open_config(&self.config);
        let layout = config.layout();

        let (mut session, report) = ops::generate::start(&config)?;
        report.render(&mut TerminalOutput::new());

        if !session.is_watching() {
            return Ok(());
        }

        let watcher = ServiceWatcher::new(&layout).wrap_err_with(|| {
            format!(
                "Failed to watch services directory '{}'",
                layout.services_dir.display()
            )
        })?;
        info!(dir = %layout.services_dir.display(), "watching for changes");

        for event in watcher.events() {
            match session.handle(&event) {
                Ok(ReconcileOutcome::Reconciled { added, published }) => {
                    for name in &added {
                        println!("  + {}", name);
                    }
                    let written = published.iter().filter(|p| p.result.is_written()).count();
                    info!(
                        services = session.registry().len(),
                        written, "reconciled services directory"
                    );
                }
                Ok(ReconcileOutcome::Ignored | ReconcileOutcome::ScanFailed) => {}
                Err(e) => error!(error = ?e, "failed to regenerate artifacts"),
            }
        }

        Ok(())
    }
}
