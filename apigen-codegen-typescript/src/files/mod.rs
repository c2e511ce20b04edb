//! Artifacts generated into the host build directory.

mod api_provider_dts;
mod provider_ts;

use apigen_codegen::Template;

pub use api_provider_dts::ApiProviderDts;
pub use provider_ts::ProviderTs;

/// Header placed at the top of every generated artifact.
pub const GENERATED_HEADER: &str = "Generated by apigen. Do not edit.";

/// Import alias under which the host resolves the services directory.
pub const SERVICES_ALIAS: &str = "@/services";

/// Shared HTTP client handed to every service constructor.
pub const HTTP_CLIENT: &str = "useHttpClient";

/// Interface aggregating every discovered service.
pub const PROVIDER_INTERFACE: &str = "IApiProvider";

/// Property under which the provider is injected into the app context.
pub const PROVIDER_PROPERTY: &str = "$api";

/// Import specifier of a service module.
pub(crate) fn service_module(name: &str) -> String {
    format!("{}/{}", SERVICES_ALIAS, name)
}

/// Every artifact template, in registration order.
pub fn templates() -> Vec<Box<dyn Template>> {
    vec![Box::new(ApiProviderDts), Box::new(ProviderTs)]
}
