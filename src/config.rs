use std::time::Duration;

use serde::Deserialize;

use crate::version::registries::pypi::DEFAULT_PYPI_REGISTRY;

// =============================================================================
// Time-related constants
// =============================================================================

/// Bound on the single registry request (10 seconds)
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

// =============================================================================
// Installed-version resolution
// =============================================================================

/// Environment variable consulted for a deployment-recorded installed version
pub const INSTALLED_VERSION_VAR: &str = "UPDATE_CHECK_INSTALLED_VERSION";

/// Update check configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckConfig {
    /// Package whose published version is checked
    pub package: String,
    /// Base URL of the registry queried for the latest published version
    pub registry_url: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            package: env!("CARGO_PKG_NAME").to_string(),
            registry_url: DEFAULT_PYPI_REGISTRY.to_string(),
        }
    }
}
