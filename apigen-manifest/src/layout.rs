use std::path::{Path, PathBuf};

use crate::ProjectConfig;

/// Directories of a project, resolved against the configuration location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Project root
    pub root: PathBuf,
    /// Services directory, under the root
    pub services_dir: PathBuf,
    /// Services directory relative to the root, as change events report it
    pub services_rel: PathBuf,
    /// Directory receiving generated artifacts
    pub build_dir: PathBuf,
}

impl ProjectLayout {
    pub fn resolve(base: &Path, project: &ProjectConfig) -> Self {
        let root = if project.root == Path::new(".") {
            base.to_path_buf()
        } else {
            base.join(&project.root)
        };
        let services_rel = project.services_dir();

        Self {
            services_dir: root.join(&services_rel),
            build_dir: root.join(&project.build_dir),
            services_rel,
            root,
        }
    }

    /// Express `path` relative to the project root.
    ///
    /// Relative paths are returned unchanged; absolute paths outside the root
    /// yield `None`.
    pub fn relative_to_root<'a>(&self, path: &'a Path) -> Option<&'a Path> {
        if path.is_relative() {
            return Some(path);
        }
        path.strip_prefix(&self.root).ok()
    }
}
