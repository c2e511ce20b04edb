use std::path::{Path, PathBuf};

use crate::{Manifest, ProjectLayout, Result};

/// An apigen.toml file with its location and parsed manifest.
pub struct ApigenToml {
    path: PathBuf,
    manifest: Manifest,
}

impl ApigenToml {
    /// Open and parse an apigen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let manifest = Manifest::from_file(&path)?;
        Ok(Self { path, manifest })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Resolve the project layout relative to the directory holding the file.
    pub fn layout(&self) -> ProjectLayout {
        let base = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        ProjectLayout::resolve(&base, &self.manifest.project)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_resolves_layout_next_to_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("apigen.toml");
        fs::write(&path, "[project]\nroot = \"web\"\n").unwrap();

        let file = ApigenToml::open(&path).unwrap();
        let layout = file.layout();

        assert_eq!(layout.root, temp.path().join("web"));
        assert_eq!(layout.services_dir, temp.path().join("web").join("services"));
        assert_eq!(layout.build_dir, temp.path().join("web").join(".nuxt"));
    }
}
