// ABOUTME: The remote analysis service provider: barcode analysis and nutrition chat
// ABOUTME: Single round trip per call, no retry, no deduplication, result discarded on cancel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analysis service provider
//!
//! Wraps the two opaque POST endpoints of the deployed nutrition service.
//! Each call is one independent round trip against the shared pooled client;
//! concurrent scans or chat messages fire independent requests and no
//! ordering is assumed between them. Cancellation is caller-driven: dropping
//! the future abandons the request and its result is simply discarded.

use reqwest::Client;
use tracing::{debug, error};

use crate::config::ServiceConfig;
use crate::constants::endpoints;
use crate::errors::{AppError, AppResult};
use crate::models::{ProductDetails, ProfileDocument};

use super::http_client::shared_client;
use super::requests::{build_analysis_request, build_chat_request};
use super::responses::{parse_analysis_response, parse_chat_response};

/// Client for the remote analysis/chat service
pub struct AnalysisProvider {
    client: Client,
    config: ServiceConfig,
}

impl Default for AnalysisProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisProvider {
    /// Provider against the default deployed service
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: shared_client().clone(),
            config: ServiceConfig::default(),
        }
    }

    /// Provider against an explicit service configuration
    #[must_use]
    pub fn with_config(config: ServiceConfig) -> Self {
        Self {
            client: shared_client().clone(),
            config,
        }
    }

    /// Fetch and normalize product details for a barcode
    ///
    /// # Errors
    ///
    /// - Missing-field error when the profile lacks a required scalar
    /// - Unavailable error when the service cannot be reached
    /// - Server error for a non-2xx reply, invalid-format error for an
    ///   undecodable body
    pub async fn fetch_product_details(
        &self,
        doc: &ProfileDocument,
        barcode: &str,
    ) -> AppResult<ProductDetails> {
        let request = build_analysis_request(doc, barcode)?;
        let url = self.config.endpoint(endpoints::BARCODE_DETAILS);
        debug!(barcode, "requesting product analysis");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(barcode, "analysis request failed: {e}");
                AppError::service_unavailable(format!("Analysis service unreachable: {e}"))
                    .with_source(e)
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            AppError::service_unavailable(format!("Failed to read analysis response: {e}"))
                .with_source(e)
        })?;

        debug!(barcode, status, "analysis response received");
        parse_analysis_response(status, &body)
    }

    /// Ask the nutrition assistant a free-text question
    ///
    /// Succeeds with any profile, complete or not.
    ///
    /// # Errors
    ///
    /// - Unavailable error when the service cannot be reached
    /// - Server error for a non-2xx reply, invalid-format error when the
    ///   body carries neither a `response` nor a `reply` string
    pub async fn restaurant_suggestion(
        &self,
        doc: &ProfileDocument,
        question: &str,
    ) -> AppResult<String> {
        let request = build_chat_request(doc, question);
        let url = self.config.endpoint(endpoints::RESTAURANT_SUGGESTION);
        debug!("requesting nutrition suggestion");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("chat request failed: {e}");
                AppError::service_unavailable(format!("Chat service unreachable: {e}"))
                    .with_source(e)
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            AppError::service_unavailable(format!("Failed to read chat response: {e}"))
                .with_source(e)
        })?;

        debug!(status, "chat response received");
        parse_chat_response(status, &body)
    }
}
