// ABOUTME: Provider module for the remote nutrition analysis and chat services
// ABOUTME: Request construction, response normalization, and the HTTP round trip
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Providers Module
//!
//! The engine's only asynchronous boundary: two opaque POST endpoints on the
//! remote analysis service. Request construction and response normalization
//! are pure functions ([`requests`], [`responses`]); [`analysis`] wires them
//! to a single non-blocking round trip with no retry, no deduplication, and
//! no ordering assumptions between concurrent calls.
//!
//! The required/optional field split is asymmetric by design: barcode
//! analysis demands a complete biometric profile, chat accepts any profile.

/// The analysis service provider (HTTP round trips)
pub mod analysis;
/// Shared HTTP client with connection pooling
pub mod http_client;
/// Outbound request payloads and builders
pub mod requests;
/// Inbound response validation and decoding
pub mod responses;

pub use analysis::AnalysisProvider;
pub use requests::{build_analysis_request, build_chat_request, AnalysisRequest, ChatRequest};
pub use responses::{parse_analysis_response, parse_chat_response};
