//! Configuration types for apigen.toml.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Base URL used when `[api] baseUrl` is not set.
pub const DEFAULT_BASE_URL: &str = "/";

/// Build directory used when `[project] build_dir` is not set.
pub const DEFAULT_BUILD_DIR: &str = ".nuxt";

/// Glob matched against service file names.
pub const DEFAULT_PATTERN: &str = "*.{js,ts}";

/// Root of apigen.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Project layout
    #[serde(default)]
    pub project: ProjectConfig,

    /// Module options, forwarded to the public runtime config
    #[serde(default)]
    pub api: ModuleOptions,
}

/// `[project]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project root, relative to the directory holding apigen.toml
    pub root: PathBuf,
    /// Directory receiving generated artifacts, relative to the root
    pub build_dir: PathBuf,
    /// Host framework compatibility version (3 or 4)
    pub compatibility_version: u8,
    /// Services directory override, relative to the root
    pub services_dir: Option<PathBuf>,
    /// Glob matched against file names inside the services directory
    pub pattern: String,
    /// Also rewrite the type declaration on every watch reconciliation
    pub regenerate_types_on_watch: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            build_dir: PathBuf::from(DEFAULT_BUILD_DIR),
            compatibility_version: 3,
            services_dir: None,
            pattern: DEFAULT_PATTERN.to_string(),
            regenerate_types_on_watch: false,
        }
    }
}

impl ProjectConfig {
    /// Services directory relative to the project root.
    ///
    /// Version 4 projects keep their sources under `app/`. `.` components of
    /// an override are dropped so the result compares equal to the paths
    /// change events carry.
    pub fn services_dir(&self) -> PathBuf {
        match &self.services_dir {
            Some(dir) => without_cur_dir(dir),
            None if self.compatibility_version == 4 => PathBuf::from("app").join("services"),
            None => PathBuf::from("services"),
        }
    }
}

fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

/// `[api]` section: options of the host module.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleOptions {
    /// Base URL for requests made through the injected fetch instance
    #[serde(rename = "baseUrl", default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}
