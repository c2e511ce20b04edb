//! List operation - discovered services.

use apigen_codegen::{FsScanner, NameRegistry, discover};
use apigen_manifest::ApigenToml;
use eyre::Result;

use crate::reports::ListReport;

/// Execute the list operation.
///
/// Runs the same discovery as `generate` without publishing anything.
pub fn list(config: &ApigenToml) -> Result<ListReport> {
    let layout = config.layout();
    let scanner = FsScanner::new(&config.manifest().project.pattern)?;

    let mut registry = NameRegistry::new();
    registry.extend(discover(&scanner, &layout.services_dir)?);

    Ok(ListReport {
        services_dir: layout.services_dir,
        services: registry
            .names_in_order()
            .map(|name| name.to_string())
            .collect(),
    })
}
