//! Artifact templates: named generators over a registry snapshot.

use std::fmt;

use eyre::Result;

use crate::{Error, NameRegistry};

/// Kind of generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Ambient type declaration consumed by the type checker.
    TypeDeclaration,
    /// Executable module imported by the host at runtime.
    Module,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeDeclaration => write!(f, "types"),
            Self::Module => write!(f, "module"),
        }
    }
}

/// A named artifact whose content is a pure projection of the registry.
pub trait Template {
    /// Output path relative to the build directory (e.g. `provider.ts`).
    fn filename(&self) -> &str;

    fn kind(&self) -> ArtifactKind;

    /// Render the artifact. Only called with a non-empty registry.
    fn render(&self, registry: &NameRegistry) -> Result<String>;
}

/// Rendered content of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: String,
    pub kind: ArtifactKind,
    pub content: String,
}

/// Render `template`, declining when there is nothing to generate.
pub fn render_artifact(template: &dyn Template, registry: &NameRegistry) -> Result<Artifact> {
    if registry.is_empty() {
        return Err(Error::EmptyRegistry(template.filename().to_string()).into());
    }
    Ok(Artifact {
        filename: template.filename().to_string(),
        kind: template.kind(),
        content: template.render(registry)?,
    })
}
