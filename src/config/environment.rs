// ABOUTME: Environment-based configuration for external service access
// ABOUTME: Base URL and timeout settings loaded from environment variables with defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Service configuration loaded from the environment

use crate::constants::env_config;
use crate::errors::{AppError, AppResult};
use url::Url;

/// Configuration for reaching the remote analysis/chat service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL of the deployed service (no trailing slash)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: env_config::DEFAULT_ANALYSIS_API_BASE.to_owned(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a config error if `NUTRIGUIDE_API_BASE_URL` is set to a value
    /// that is not a valid absolute URL.
    pub fn from_env() -> AppResult<Self> {
        let base_url = env_config::analysis_api_base();
        let parsed = Url::parse(&base_url)
            .map_err(|e| AppError::config(format!("Invalid service base URL: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(AppError::config(format!(
                "Service base URL cannot be a base: {base_url}"
            )));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            timeout_secs: env_config::http_timeout_secs(),
            connect_timeout_secs: env_config::http_connect_timeout_secs(),
        })
    }

    /// Absolute URL for an endpoint path on the service
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::constants::endpoints;

    #[test]
    fn test_default_config_points_at_deployed_service() {
        let config = ServiceConfig::default();
        assert!(config.base_url.starts_with("https://"));
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_endpoint_joins_base_and_path() {
        let config = ServiceConfig {
            base_url: "https://example.com".to_owned(),
            ..ServiceConfig::default()
        };
        assert_eq!(
            config.endpoint(endpoints::BARCODE_DETAILS),
            "https://example.com/getDetailsFromBarcode"
        );
    }
}
