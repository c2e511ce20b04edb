//! provider.ts generator.

use apigen_codegen::{ArtifactKind, NameRegistry, Template};
use eyre::Result;

use super::{GENERATED_HEADER, HTTP_CLIENT, service_module};
use crate::{
    ast::{Export, Import, JsObject, NewExpr},
    code_file::CodeFile,
};

/// Runtime module default-exporting one instance per service.
///
/// `useHttpClient` is auto-imported by the host, so only the service
/// classes are imported here.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProviderTs;

impl ProviderTs {
    pub const FILENAME: &'static str = "provider.ts";
}

impl Template for ProviderTs {
    fn filename(&self) -> &str {
        Self::FILENAME
    }

    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Module
    }

    fn render(&self, registry: &NameRegistry) -> Result<String> {
        let imports = registry
            .names_in_order()
            .map(|name| Import::new(service_module(name.as_str())).default(name.as_str()));

        let provider = registry
            .names_in_order()
            .fold(JsObject::new(), |object, name| {
                object.raw(name.as_str(), NewExpr::new(name.as_str()).arg(HTTP_CLIENT))
            });

        Ok(CodeFile::new()
            .header(GENERATED_HEADER)
            .imports(imports)
            .export(Export::default_object(provider))
            .render())
    }
}
