//! PyPI registry client for fetching the latest published package version

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::FETCH_TIMEOUT;
use crate::version::error::RegistryError;
use crate::version::registry::Registry;

pub const DEFAULT_PYPI_REGISTRY: &str = "https://pypi.org";

/// PyPI registry client
pub struct PypiRegistry {
    client: Client,
    base_url: String,
}

impl Default for PypiRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_PYPI_REGISTRY.to_string())
    }
}

impl PypiRegistry {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

/// PyPI JSON API response structure
#[derive(Debug, Deserialize)]
struct PypiResponse {
    info: PypiInfo,
}

/// Package information from PyPI
#[derive(Debug, Deserialize)]
struct PypiInfo {
    /// Latest version (according to PyPI)
    version: String,
}

#[async_trait]
impl Registry for PypiRegistry {
    async fn fetch_latest_version(&self, package_name: &str) -> Result<String, RegistryError> {
        let url = format!("{}/pypi/{}/json", self.base_url, package_name);
        debug!("Fetching latest published version: {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RegistryError::Status(response.status()));
        }

        let pypi_response: PypiResponse = response
            .json()
            .await
            .map_err(|e| RegistryError::InvalidResponse(e.to_string()))?;

        debug!(
            "Registry reports {} as latest version of {}",
            pypi_response.info.version, package_name
        );

        Ok(pypi_response.info.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn fetch_latest_version_returns_info_version() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/pypi/requests/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "info": {"version": "2.32.5"},
                    "releases": {
                        "2.31.0": [],
                        "2.32.0": [],
                        "2.32.5": []
                    }
                }"#,
            )
            .create_async()
            .await;

        let registry = PypiRegistry::new(server.url());
        let result = registry.fetch_latest_version("requests").await.unwrap();

        mock.assert_async().await;

        assert_eq!(result, "2.32.5");
    }

    #[tokio::test]
    async fn fetch_latest_version_returns_status_error_for_missing_package() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/pypi/nonexistent/json")
            .with_status(404)
            .create_async()
            .await;

        let registry = PypiRegistry::new(server.url());
        let result = registry.fetch_latest_version("nonexistent").await;

        mock.assert_async().await;

        assert!(matches!(
            result,
            Err(RegistryError::Status(reqwest::StatusCode::NOT_FOUND))
        ));
    }

    #[tokio::test]
    async fn fetch_latest_version_returns_invalid_response_for_malformed_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/pypi/requests/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"releases": {}}"#)
            .create_async()
            .await;

        let registry = PypiRegistry::new(server.url());
        let result = registry.fetch_latest_version("requests").await;

        mock.assert_async().await;

        assert!(matches!(result, Err(RegistryError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_latest_version_handles_network_error() {
        // Use an invalid URL to trigger a network error
        let registry = PypiRegistry::new("http://invalid.localhost.test:99999".to_string());
        let result = registry.fetch_latest_version("requests").await;

        assert!(matches!(result, Err(RegistryError::Network(_))));
    }
}
