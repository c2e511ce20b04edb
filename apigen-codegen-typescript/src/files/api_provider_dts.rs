//! types/apiProvider.d.ts generator.

use apigen_codegen::{ArtifactKind, NameRegistry, Template};
use eyre::Result;

use super::{GENERATED_HEADER, PROVIDER_INTERFACE, PROVIDER_PROPERTY, service_module};
use crate::{
    ast::{Declare, Export, Import, Interface},
    code_file::CodeFile,
};

/// Ambient declaration typing the injected provider.
///
/// Augments the host app context with `$api: IApiProvider` and declares
/// `IApiProvider` globally with one member per service.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiProviderDts;

impl ApiProviderDts {
    pub const FILENAME: &'static str = "types/apiProvider.d.ts";
}

impl Template for ApiProviderDts {
    fn filename(&self) -> &str {
        Self::FILENAME
    }

    fn kind(&self) -> ArtifactKind {
        ArtifactKind::TypeDeclaration
    }

    fn render(&self, registry: &NameRegistry) -> Result<String> {
        let imports = registry.names_in_order().map(|name| {
            Import::new(service_module(name.as_str()))
                .default(name.as_str())
                .type_only()
        });

        let app = Declare::module("#app").item(
            Interface::new("NuxtApp")
                .private()
                .field(PROVIDER_PROPERTY, PROVIDER_INTERFACE),
        );

        let provider = Declare::global().item(
            Interface::new(PROVIDER_INTERFACE).private().fields(
                registry
                    .type_mapping()
                    .iter()
                    .map(|(name, ty)| (name.as_str(), ty.as_str())),
            ),
        );

        Ok(CodeFile::new()
            .header(GENERATED_HEADER)
            .imports(imports)
            .add(app)
            .add(provider)
            .export(Export::empty())
            .render())
    }
}

#[cfg(test)]
mod tests {
    use apigen_core::ServiceName;

    use super::*;

    fn registry(names: &[&str]) -> NameRegistry {
        let mut registry = NameRegistry::new();
        registry.extend(names.iter().map(|n| ServiceName::new(*n).unwrap()));
        registry
    }

    #[test]
    fn test_one_type_import_and_member_per_service() {
        let code = ApiProviderDts
            .render(&registry(&["BlogService", "TestService"]))
            .unwrap();

        assert_eq!(code.matches("import type ").count(), 2);
        assert!(code.contains("import type BlogService from \"@/services/BlogService\";"));
        assert!(code.contains("    BlogService: BlogService;\n    TestService: TestService;\n"));
        assert!(code.contains("    $api: IApiProvider;"));
        assert!(code.ends_with("export {};\n"));
    }

    #[test]
    fn test_member_order_follows_registry() {
        let code = ApiProviderDts
            .render(&registry(&["TestService", "BlogService"]))
            .unwrap();

        let test = code.find("TestService: TestService;").unwrap();
        let blog = code.find("BlogService: BlogService;").unwrap();
        assert!(test < blog);
    }
}
