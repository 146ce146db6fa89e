// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Environment-backed settings, endpoint paths, and engine defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Application constants grouped by domain. Physiological and scoring
//! constants live next to the algorithms that use them, in
//! `crate::intelligence::physiological_constants`.

use std::env;

/// Environment-based configuration
pub mod env_config {
    use super::env;

    /// Default base URL of the deployed analysis/chat service
    pub const DEFAULT_ANALYSIS_API_BASE: &str =
        "https://9e4d9l54il.execute-api.us-east-1.amazonaws.com";

    /// Get the analysis service base URL from environment or default
    #[must_use]
    pub fn analysis_api_base() -> String {
        env::var("NUTRIGUIDE_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_ANALYSIS_API_BASE.to_owned())
    }

    /// Get the outbound request timeout (seconds) from environment or default
    #[must_use]
    pub fn http_timeout_secs() -> u64 {
        env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30)
    }

    /// Get the outbound connect timeout (seconds) from environment or default
    #[must_use]
    pub fn http_connect_timeout_secs() -> u64 {
        env::var("HTTP_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10)
    }
}

/// Endpoint paths on the analysis service
pub mod endpoints {
    /// Barcode lookup and suitability analysis
    pub const BARCODE_DETAILS: &str = "/getDetailsFromBarcode";
    /// Free-text nutrition question answering
    pub const RESTAURANT_SUGGESTION: &str = "/getRestaurantSuggestion";
}

/// Service names for structured logging
pub mod service_names {
    /// This engine
    pub const NUTRIGUIDE_ENGINE: &str = "nutriguide-engine";
    /// The remote barcode analysis service
    pub const ANALYSIS_SERVICE: &str = "nutrition-analysis";
    /// The remote chat assistant service
    pub const CHAT_SERVICE: &str = "nutrition-assistant";
}

/// Engine-wide default values
pub mod defaults {
    /// BMI assumed by the health-score engine when the profile has none
    pub const FALLBACK_BMI: f64 = 25.0;
}
