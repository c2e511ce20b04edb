//! Service file discovery.

use std::path::{Path, PathBuf};

use apigen_core::ServiceName;
use eyre::Result;
use globset::{Glob, GlobMatcher};
use tracing::debug;

use crate::Error;

/// Lists candidate service files in a directory.
pub trait FileScanner {
    /// Files directly inside `dir` that look like service sources.
    ///
    /// Implementations return paths in a stable order. A missing directory
    /// yields an empty list.
    fn list_service_files(&self, dir: &Path) -> Result<Vec<PathBuf>>;
}

/// Scans the filesystem, matching file names against a glob.
#[derive(Debug, Clone)]
pub struct FsScanner {
    matcher: GlobMatcher,
}

impl FsScanner {
    pub fn new(pattern: &str) -> Result<Self> {
        let glob = Glob::new(pattern).map_err(|source| Error::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            matcher: glob.compile_matcher(),
        })
    }
}

impl FileScanner for FsScanner {
    fn list_service_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let scan_err = |source| Error::Scan {
            dir: dir.to_path_buf(),
            source,
        };

        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(scan_err(e).into()),
        };

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(scan_err)?;
            if !entry.file_type().map_err(scan_err)?.is_file() {
                continue;
            }
            let name = entry.file_name();
            if self.matcher.is_match(Path::new(&name)) {
                files.push(entry.path());
            }
        }

        files.sort();
        Ok(files)
    }
}

/// Identifier portion of a service file path.
///
/// Strips the directory and the final extension. Hidden entries and paths
/// without a stem yield `None`.
pub fn base_name_of(path: &Path) -> Option<&str> {
    let stem = path.file_stem()?.to_str()?;
    if stem.is_empty() || stem.starts_with('.') {
        return None;
    }
    Some(stem)
}

/// Turn scanned paths into validated service names.
///
/// Entries without a base name are skipped. Any invalid name fails the
/// whole batch, so callers never merge a partial result.
pub fn service_names(paths: &[PathBuf]) -> Result<Vec<ServiceName>> {
    let mut names = Vec::with_capacity(paths.len());
    for path in paths {
        let Some(base) = base_name_of(path) else {
            debug!(path = %path.display(), "skipping entry without a base name");
            continue;
        };
        let name = ServiceName::new(base).map_err(|source| Error::InvalidName {
            path: path.clone(),
            source,
        })?;
        debug!(service = %name, path = %path.display(), "discovered service");
        names.push(name);
    }
    Ok(names)
}

/// Scan `dir` and validate every discovered name.
pub fn discover(scanner: &impl FileScanner, dir: &Path) -> Result<Vec<ServiceName>> {
    let files = scanner.list_service_files(dir)?;
    service_names(&files)
}
