//! Info command report data structures.

use std::path::PathBuf;

use apigen_manifest::RuntimeConfig;
use serde::Serialize;

use super::output::{Output, Report};

/// Report data from project info.
#[derive(Debug, Serialize)]
pub struct InfoReport {
    /// Config file path.
    pub config_path: PathBuf,
    /// Project root.
    pub root: PathBuf,
    /// Scanned services directory.
    pub services_dir: PathBuf,
    /// Directory receiving artifacts.
    pub build_dir: PathBuf,
    pub compatibility_version: u8,
    /// Glob matched against service file names.
    pub pattern: String,
    /// Whether `[api] baseUrl` was set explicitly.
    pub base_url_configured: bool,
    /// Public runtime config contributed to the host.
    pub runtime: RuntimeConfig,
    /// Base URL of the injected fetch instance.
    pub fetch_base_url: String,
    /// Generated artifacts.
    pub artifacts: Vec<ArtifactInfo>,
}

/// A generated artifact and whether it is present on disk.
#[derive(Debug, Serialize)]
pub struct ArtifactInfo {
    pub filename: String,
    pub kind: String,
    pub path: PathBuf,
    pub exists: bool,
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("apigen");
        out.key_value("Config", &self.config_path.display().to_string());
        out.newline();

        out.section("Project");
        out.key_value_indented("root", &self.root.display().to_string());
        out.key_value_indented("services", &self.services_dir.display().to_string());
        out.key_value_indented("build", &self.build_dir.display().to_string());
        out.key_value_indented(
            "compatibility version",
            &self.compatibility_version.to_string(),
        );
        out.key_value_indented("pattern", &self.pattern);
        out.newline();

        out.section("Runtime config");
        let base_url = if self.base_url_configured {
            self.runtime.api.base_url.clone()
        } else {
            format!("{} (default)", self.runtime.api.base_url)
        };
        out.key_value_indented("api.baseUrl", &base_url);
        out.key_value_indented("$fetch baseURL", &self.fetch_base_url);
        out.newline();

        out.section("Artifacts");
        for artifact in &self.artifacts {
            let state = if artifact.exists { "present" } else { "missing" };
            out.list_item(&format!(
                "{} [{}] {}",
                artifact.path.display(),
                artifact.kind,
                state
            ));
        }
    }
}
