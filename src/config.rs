//! Catalog configuration
//!
//! Loaded from YAML; every field has a default, so an empty document is a
//! valid configuration pointing at the public PokeAPI.
//!
//! ```yaml
//! base_url: https://pokeapi.co/api/v2/
//! endpoint: pokemon
//! page_size: 20
//! timeout_secs: 30
//! log_bodies: false
//! ```

use crate::error::{Error, Result};
use crate::fetch::DEFAULT_ENDPOINT;
use crate::http::HttpClientConfig;
use crate::pagination::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::path::Path;
use std::time::Duration;

/// Default listing API base URL
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/";

/// Catalog session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL of the listing API
    pub base_url: String,

    /// Listing path relative to `base_url`
    pub endpoint: String,

    /// Entries per page
    pub page_size: u32,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Custom user agent
    pub user_agent: Option<String>,

    /// Log response bodies at debug level
    pub log_bodies: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE.get(),
            timeout_secs: 30,
            user_agent: None,
            log_bodies: false,
        }
    }
}

impl CatalogConfig {
    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        self.page_size()?;
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be greater than 0"));
        }
        if self.endpoint.trim().is_empty() {
            return Err(Error::invalid_value("endpoint", "must not be empty"));
        }
        let url = url::Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "base_url",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }
        Ok(())
    }

    /// Page size as a non-zero count
    pub fn page_size(&self) -> Result<NonZeroU32> {
        NonZeroU32::new(self.page_size)
            .ok_or_else(|| Error::invalid_value("page_size", "must be greater than 0"))
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// HTTP client settings derived from this config
    pub fn http_client_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.base_url)
            .timeout(self.timeout())
            .log_bodies(self.log_bodies);
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }
        builder.build()
    }
}
