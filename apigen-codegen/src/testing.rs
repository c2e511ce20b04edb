//! Test doubles for the discovery pipeline.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    cell::{Cell, RefCell},
    path::{Path, PathBuf},
};

use apigen_core::WriteResult;
use eyre::Result;

use crate::{
    Error, NameRegistry,
    publisher::{Published, TemplatePublisher, TemplateSet},
    scanner::FileScanner,
    template::{Artifact, ArtifactKind, Template, render_artifact},
};

/// Scanner returning a fixed, replaceable list of files.
#[derive(Debug, Default)]
pub struct StaticScanner {
    files: RefCell<Vec<PathBuf>>,
    fail: Cell<bool>,
}

impl StaticScanner {
    pub fn new<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let scanner = Self::default();
        scanner.set_files(files);
        scanner
    }

    /// Replace the listed files.
    pub fn set_files<I, P>(&self, files: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        *self.files.borrow_mut() = files.into_iter().map(Into::into).collect();
    }

    /// Make subsequent scans fail with an I/O error.
    pub fn set_failing(&self, fail: bool) {
        self.fail.set(fail);
    }
}

impl FileScanner for StaticScanner {
    fn list_service_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if self.fail.get() {
            return Err(Error::Scan {
                dir: dir.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            }
            .into());
        }
        Ok(self.files.borrow().clone())
    }
}

/// Publisher that keeps every published artifact in memory.
#[derive(Default)]
pub struct MemoryPublisher {
    templates: TemplateSet,
    published: Vec<Artifact>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every artifact published so far, oldest first.
    pub fn published(&self) -> &[Artifact] {
        &self.published
    }

    /// Most recent content published under `filename`.
    pub fn latest(&self, filename: &str) -> Option<&str> {
        self.published
            .iter()
            .rev()
            .find(|a| a.filename == filename)
            .map(|a| a.content.as_str())
    }

    /// How many times `filename` was published.
    pub fn publish_count(&self, filename: &str) -> usize {
        self.published
            .iter()
            .filter(|a| a.filename == filename)
            .count()
    }

    pub fn template_count(&self) -> usize {
        self.templates.len()
    }
}

impl TemplatePublisher for MemoryPublisher {
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
            path: None,
            result: WriteResult::Written,
        };
        self.published.push(artifact);
        Ok(published)
    }

    fn contents(&self, filename: &str, registry: &NameRegistry) -> Result<String> {
        Ok(render_artifact(self.templates.get(filename)?, registry)?.content)
    }

    fn filenames(&self, kind: ArtifactKind) -> Vec<String> {
        self.templates.filenames(kind)
    }
}

/// Template listing registered names one per line.
pub struct NamesTemplate {
    filename: &'static str,
    kind: ArtifactKind,
}

impl NamesTemplate {
    pub fn module(filename: &'static str) -> Self {
        Self {
            filename,
            kind: ArtifactKind::Module,
        }
    }

    pub fn types(filename: &'static str) -> Self {
        Self {
            filename,
            kind: ArtifactKind::TypeDeclaration,
        }
    }
}

impl Template for NamesTemplate {
    fn filename(&self) -> &str {
        self.filename
    }

    fn kind(&self) -> ArtifactKind {
        self.kind
    }

    fn render(&self, registry: &NameRegistry) -> Result<String> {
        Ok(registry
            .names_in_order()
            .map(|n| format!("{}\n", n))
            .collect())
    }
}
