//! Clean operation - remove generated artifacts.

use apigen_codegen::Template;
use apigen_codegen_typescript::templates;
use apigen_core::File;
use apigen_manifest::ApigenToml;
use eyre::Result;

use crate::reports::CleanReport;

/// Options for the clean operation.
pub struct CleanOptions {
    /// Whether to preview without deleting.
    pub dry_run: bool,
}

/// Execute the clean operation.
pub fn clean(config: &ApigenToml, opts: CleanOptions) -> Result<CleanReport> {
    let build_dir = config.layout().build_dir;

    let mut deleted = Vec::new();
    for template in templates() {
        let file = File::new(build_dir.join(template.filename()), "");
        let removed = if opts.dry_run {
            file.exists()
        } else {
            file.remove()?
        };
        if removed {
            deleted.push(file.path().to_path_buf());
        }
    }

    Ok(CleanReport {
        dry_run: opts.dry_run,
        deleted,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_clean_removes_only_artifacts() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("apigen.toml");
        fs::write(&config, "").unwrap();
        let build = temp.path().join(".nuxt");
        fs::create_dir_all(build.join("types")).unwrap();
        fs::write(build.join("provider.ts"), "export default {};").unwrap();
        fs::write(build.join("nuxt.d.ts"), "").unwrap();
        let config = ApigenToml::open(&config).unwrap();

        let preview = clean(&config, CleanOptions { dry_run: true }).unwrap();
        assert_eq!(preview.deleted, [build.join("provider.ts")]);
        assert!(build.join("provider.ts").exists());

        let report = clean(&config, CleanOptions { dry_run: false }).unwrap();
        assert_eq!(report.deleted, [build.join("provider.ts")]);
        assert!(!build.join("provider.ts").exists());
        assert!(build.join("nuxt.d.ts").exists());
    }
}
