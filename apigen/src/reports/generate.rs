//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from artifact generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Directory that was scanned.
    pub services_dir: PathBuf,
    /// Registered services, in provider order.
    pub services: Vec<String>,
    /// Warning messages from setup.
    pub warnings: Vec<String>,
    /// Generation result (files written, preview or nothing to do).
    pub result: GenerationResult,
}

/// Result of artifact generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Artifacts were published to the build directory.
    Written(Vec<WrittenArtifact>),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
    /// The services directory held no service file.
    NoServices,
}

/// A published artifact.
#[derive(Debug)]
pub struct WrittenArtifact {
    pub filename: String,
    pub path: Option<PathBuf>,
    /// False when the file already had the same content.
    pub written: bool,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the build directory.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(artifacts) => self.render_written(out, artifacts),
            GenerationResult::Preview(files) => self.render_preview(out, files),
            GenerationResult::NoServices => {
                out.preformatted(&format!(
                    "No services found in {}, nothing generated.",
                    self.services_dir.display()
                ));
            }
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, artifacts: &[WrittenArtifact]) {
        out.section(&format!("Services ({})", self.services.len()));
        for (i, service) in self.services.iter().enumerate() {
            out.numbered_item(i + 1, service);
        }
        out.newline();

        out.section("Artifacts");
        for artifact in artifacts {
            let location = artifact
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| artifact.filename.clone());
            if artifact.written {
                out.added_item(&location);
            } else {
                out.list_item(&format!("{} (unchanged)", location));
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be generated for {} services",
            files.len(),
            self.services.len()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_unchanged_artifacts_are_marked() {
        let report = GenerateReport {
            services_dir: PathBuf::from("services"),
            services: vec!["BlogService".to_string()],
            warnings: vec!["`[api] baseUrl` is not set".to_string()],
            result: GenerationResult::Written(vec![
                WrittenArtifact {
                    filename: "provider.ts".to_string(),
                    path: Some(PathBuf::from(".nuxt/provider.ts")),
                    written: true,
                },
                WrittenArtifact {
                    filename: "types/apiProvider.d.ts".to_string(),
                    path: None,
                    written: false,
                },
            ]),
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "warning: `[api] baseUrl` is not set",
                "Services (1):",
                "  1. BlogService",
                "",
                "Artifacts:",
                "  + .nuxt/provider.ts",
                "  - types/apiProvider.d.ts (unchanged)",
            ]
        );
    }
}
