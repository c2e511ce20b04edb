//! Publishing rendered templates to the host build.

use std::path::{Path, PathBuf};

use apigen_core::{File, FileRules, WriteResult};
use eyre::Result;
use indexmap::IndexMap;
use tracing::info;

use crate::{
    Error, NameRegistry,
    template::{Artifact, ArtifactKind, Template, render_artifact},
};

/// Outcome of publishing one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    pub filename: String,
    pub kind: ArtifactKind,
    /// Where the artifact landed, when it was written to disk.
    pub path: Option<PathBuf>,
    pub result: WriteResult,
}

/// Registers templates with the host build and refreshes them on demand.
pub trait TemplatePublisher {
    /// Record `template` and publish its current content.
    ///
    /// Registering a filename twice replaces the earlier template.
    fn register(
        &mut self,
        template: Box<dyn Template>,
        registry: &NameRegistry,
    ) -> Result<Published>;

    /// Re-render a registered template and publish it again.
    fn invalidate(&mut self, filename: &str, registry: &NameRegistry) -> Result<Published>;

    /// Render a registered template without publishing it.
    fn contents(&self, filename: &str, registry: &NameRegistry) -> Result<String>;

    /// Filenames of registered templates of the given kind, in registration order.
    fn filenames(&self, kind: ArtifactKind) -> Vec<String>;
}

/// Registered templates keyed by filename.
#[derive(Default)]
pub struct TemplateSet {
    templates: IndexMap<String, Box<dyn Template>>,
}

impl TemplateSet {
    pub fn insert(&mut self, template: Box<dyn Template>) {
        self.templates
            .insert(template.filename().to_string(), template);
    }

    pub fn get(&self, filename: &str) -> Result<&dyn Template> {
        self.templates
            .get(filename)
            .map(|t| t.as_ref())
            .ok_or_else(|| Error::UnknownTemplate(filename.to_string()).into())
    }

    pub fn filenames(&self, kind: ArtifactKind) -> Vec<String> {
        self.templates
            .values()
            .filter(|t| t.kind() == kind)
            .map(|t| t.filename().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Writes artifacts below the build directory.
///
/// Files are real so that the host's module loader can import the provider
/// module. Unchanged content is left untouched on disk.
pub struct FsPublisher {
    build_dir: PathBuf,
    templates: TemplateSet,
}

impl FsPublisher {
    pub fn new(build_dir: impl Into<PathBuf>) -> Self {
        Self {
            build_dir: build_dir.into(),
            templates: TemplateSet::default(),
        }
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    fn publish(&self, template: &dyn Template, registry: &NameRegistry) -> Result<Published> {
        let artifact = render_artifact(template, registry)?;
        let path = self.build_dir.join(&artifact.filename);
        let result = File::new(&path, artifact.content)
            .with_rules(FileRules::if_changed())
            .write()?;

        if result.is_written() {
            info!(path = %path.display(), services = registry.len(), "wrote {}", artifact.filename);
        }

        Ok(Published {
            filename: artifact.filename,
            kind: artifact.kind,
            path: Some(path),
            result,
        })
    }
}

impl TemplatePublisher for FsPublisher {
    fn register(
        &mut self,
        template: Box<dyn Template>,
        registry: &NameRegistry,
    ) -> Result<Published> {
        let filename = template.filename().to_string();
        self.templates.insert(template);
        self.invalidate(&filename, registry)
    }

    fn invalidate(&mut self, filename: &str, registry: &NameRegistry) -> Result<Published> {
        let template = self.templates.get(filename)?;
        self.publish(template, registry)
    }

    fn contents(&self, filename: &str, registry: &NameRegistry) -> Result<String> {
        let template = self.templates.get(filename)?;
        Ok(render_artifact(template, registry)?.content)
    }

    fn filenames(&self, kind: ArtifactKind) -> Vec<String> {
        self.templates.filenames(kind)
    }
}

/// Renders artifacts without touching the build directory.
///
/// Used for dry runs: every publish is recorded and reported as skipped.
pub struct PreviewPublisher {
    build_dir: PathBuf,
    templates: TemplateSet,
    artifacts: Vec<Artifact>,
}

impl PreviewPublisher {
    pub fn new(build_dir: impl Into<PathBuf>) -> Self {
        Self {
            build_dir: build_dir.into(),
            templates: TemplateSet::default(),
            artifacts: Vec::new(),
        }
    }

    /// Artifacts that would have been written, in publish order.
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }
}

impl TemplatePublisher for PreviewPublisher {
    fn register(
        &mut self,
        template: Box<dyn Template>,
        registry: &NameRegistry,
    ) -> Result<Published> {
        let filename = template.filename().to_string();
        self.templates.insert(template);
        self.invalidate(&filename, registry)
    }

    fn invalidate(&mut self, filename: &str, registry: &NameRegistry) -> Result<Published> {
        let artifact = render_artifact(self.templates.get(filename)?, registry)?;
        let published = Published {
            filename: artifact.filename.clone(),
            kind: artifact.kind,
            path: Some(self.build_dir.join(&artifact.filename)),
            result: WriteResult::Skipped,
        };
        self.artifacts.push(artifact);
        Ok(published)
    }

    fn contents(&self, filename: &str, registry: &NameRegistry) -> Result<String> {
        Ok(render_artifact(self.templates.get(filename)?, registry)?.content)
    }

    fn filenames(&self, kind: ArtifactKind) -> Vec<String> {
        self.templates.filenames(kind)
    }
}
