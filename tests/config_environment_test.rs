// ABOUTME: Environment configuration tests for the service settings
// ABOUTME: Default base URL, overrides, and rejection of malformed URLs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Service configuration tests
//!
//! Environment-variable driven; serialized because the variables are process
//! global.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriguide_engine::config::ServiceConfig;
use nutriguide_engine::constants::endpoints;
use serial_test::serial;
use std::env;

#[test]
#[serial]
fn test_defaults_without_environment() {
    env::remove_var("NUTRIGUIDE_API_BASE_URL");
    env::remove_var("HTTP_TIMEOUT_SECS");

    let config = ServiceConfig::from_env().unwrap();
    assert_eq!(
        config.base_url,
        "https://9e4d9l54il.execute-api.us-east-1.amazonaws.com"
    );
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.connect_timeout_secs, 10);
}

#[test]
#[serial]
fn test_environment_overrides() {
    env::set_var("NUTRIGUIDE_API_BASE_URL", "https://staging.example.com/");
    env::set_var("HTTP_TIMEOUT_SECS", "5");

    let config = ServiceConfig::from_env().unwrap();
    // Trailing slash is normalized away so endpoint joining stays clean
    assert_eq!(config.base_url, "https://staging.example.com");
    assert_eq!(config.timeout_secs, 5);
    assert_eq!(
        config.endpoint(endpoints::RESTAURANT_SUGGESTION),
        "https://staging.example.com/getRestaurantSuggestion"
    );

    env::remove_var("NUTRIGUIDE_API_BASE_URL");
    env::remove_var("HTTP_TIMEOUT_SECS");
}

#[test]
#[serial]
fn test_malformed_base_url_is_a_config_error() {
    env::set_var("NUTRIGUIDE_API_BASE_URL", "not a url");
    assert!(ServiceConfig::from_env().is_err());
    env::remove_var("NUTRIGUIDE_API_BASE_URL");
}
