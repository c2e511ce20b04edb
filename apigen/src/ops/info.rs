//! Info operation - resolved project information.

use apigen_codegen::Template;
use apigen_codegen_typescript::templates;
use apigen_manifest::{ApigenToml, RuntimeConfig};

use crate::reports::{ArtifactInfo, InfoReport};

/// Execute the info operation.
///
/// Collects the resolved layout, runtime config and artifact locations.
pub fn info(config: &ApigenToml) -> InfoReport {
    let manifest = config.manifest();
    let layout = config.layout();
    let runtime = RuntimeConfig::resolve(&manifest.api);

    let artifacts = templates()
        .iter()
        .map(|template| {
            let path = layout.build_dir.join(template.filename());
            ArtifactInfo {
                filename: template.filename().to_string(),
                kind: template.kind().to_string(),
                exists: path.is_file(),
                path,
            }
        })
        .collect();

    InfoReport {
        config_path: std::fs::canonicalize(config.path())
            .unwrap_or_else(|_| config.path().to_path_buf()),
        root: layout.root,
        services_dir: layout.services_dir,
        build_dir: layout.build_dir,
        compatibility_version: manifest.project.compatibility_version,
        pattern: manifest.project.pattern.clone(),
        base_url_configured: manifest.api.base_url.is_some(),
        fetch_base_url: runtime.fetch_base_url(),
        runtime,
        artifacts,
    }
}
