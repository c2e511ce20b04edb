//! Public runtime configuration derived from the module options.

use serde::Serialize;

use crate::{DEFAULT_BASE_URL, ModuleOptions};

/// The `api` namespace of the host's public runtime config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiRuntimeConfig {
    #[serde(rename = "baseUrl")]
    pub base_url: String,
}

/// Public runtime config contributed by apigen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeConfig {
    pub api: ApiRuntimeConfig,
}

impl RuntimeConfig {
    /// Merge user options over the defaults.
    pub fn resolve(options: &ModuleOptions) -> Self {
        let base_url = options
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            api: ApiRuntimeConfig { base_url },
        }
    }

    /// Base URL of the injected fetch instance: `{baseUrl}/api`.
    pub fn fetch_base_url(&self) -> String {
        format!("{}/api", self.api.base_url.trim_end_matches('/'))
    }
}
