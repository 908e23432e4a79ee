//! Update check orchestration
//!
//! Ties the registry lookup and the installed-version resolution together
//! and reduces them to a single three-field outcome. Nothing here returns an
//! error to the caller: an unreachable registry degrades to "assume current
//! is latest", an unresolvable installed version to "assume an update
//! exists".

use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::version::error::RegistryError;
use crate::version::installed::{
    UNKNOWN_VERSION, VersionSource, default_sources, resolve_installed_version,
};
use crate::version::registries::pypi::PypiRegistry;
use crate::version::registry::Registry;
use crate::version::semver::compare;

/// Result of an update check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionCheck {
    /// Whether the installed version is at least as new as the published one
    pub is_latest: bool,
    /// Latest version reported by the registry (if reachable)
    pub latest_version: Option<String>,
    /// Locally resolved installed version, or [`UNKNOWN_VERSION`]
    pub current_version: String,
}

/// Performs a single update check for one package against one registry
pub struct UpdateChecker<R: Registry> {
    registry: R,
    sources: Vec<Box<dyn VersionSource>>,
    package: String,
}

impl UpdateChecker<PypiRegistry> {
    /// Checker wired to PyPI with the default installed-version sources
    pub fn new(package: impl Into<String>) -> Self {
        Self::build(PypiRegistry::default(), default_sources(), package)
    }
}

impl<R: Registry> UpdateChecker<R> {
    /// Build a checker with a custom registry and source chain
    pub fn build(
        registry: R,
        sources: Vec<Box<dyn VersionSource>>,
        package: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            sources,
            package: package.into(),
        }
    }

    /// Fetch the latest published version, absorbing every failure.
    ///
    /// Absence is the only failure signal: a non-success status is logged at
    /// warning level, transport and decode failures at debug level.
    async fn fetch_latest_published(&self) -> Option<String> {
        match self.registry.fetch_latest_version(&self.package).await {
            Ok(version) => Some(version),
            Err(RegistryError::Status(status)) => {
                warn!("Registry returned status {status} for {}", self.package);
                None
            }
            Err(e) => {
                debug!("Failed to fetch latest version of {}: {e}", self.package);
                None
            }
        }
    }

    /// Check whether the installed version is the latest published one.
    ///
    /// Fails open when the registry cannot be consulted and closed when the
    /// installed version cannot be determined.
    pub async fn check_if_latest(&self) -> VersionCheck {
        let current_version = resolve_installed_version(&self.sources);
        let latest_version = self.fetch_latest_published().await;

        let Some(latest) = latest_version else {
            return VersionCheck {
                is_latest: true,
                latest_version: None,
                current_version,
            };
        };

        if current_version == UNKNOWN_VERSION {
            return VersionCheck {
                is_latest: false,
                latest_version: Some(latest),
                current_version,
            };
        }

        let is_latest = compare(&current_version, &latest).ordering() != Ordering::Less;

        VersionCheck {
            is_latest,
            latest_version: Some(latest),
            current_version,
        }
    }
}
