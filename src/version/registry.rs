//! Registry trait for fetching the latest published package version

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;

/// Trait for looking up the latest published version of a package
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches the latest published version of a package from the registry
    ///
    /// # Arguments
    /// * `package_name` - The name of the package as known to the registry
    ///
    /// # Returns
    /// * `Ok(String)` - The version the registry currently reports as latest
    /// * `Err(RegistryError)` - If the fetch fails
    async fn fetch_latest_version(&self, package_name: &str) -> Result<String, RegistryError>;
}
