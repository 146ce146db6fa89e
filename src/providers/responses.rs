// ABOUTME: Inbound response validation and decoding for the analysis and chat endpoints
// ABOUTME: Transport status is checked before any body parsing; shapes are decoded strictly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Response normalization
//!
//! Converts raw service replies into typed domain records. The transport
//! status is checked before the body is touched: a non-2xx reply is a server
//! error carrying the status code verbatim, whatever the body contains.
//!
//! The chat endpoint has two deployed reply shapes, `{"response": …}` and
//! `{"reply": …}`; both are accepted, in that order.

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::ProductDetails;

/// Envelope of a successful analysis reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Success marker; must be present and boolean for the reply to decode
    pub success: bool,
    /// The product record
    pub details: ProductDetails,
}

/// Decode an analysis reply into a product record
///
/// # Errors
///
/// - A status outside 200-299 fails with a server error carrying the code,
///   before any body parsing is attempted.
/// - A body that does not decode into the `{success, details: {…}}` envelope
///   (the `success` marker absent or non-boolean included) fails as an
///   invalid response format.
pub fn parse_analysis_response(status: u16, body: &str) -> AppResult<ProductDetails> {
    if !(200..=299).contains(&status) {
        return Err(AppError::server_error(status));
    }

    let response: AnalysisResponse = serde_json::from_str(body).map_err(|e| {
        AppError::invalid_response_format(format!("Failed to parse analysis response: {e}"))
            .with_source(e)
    })?;

    Ok(response.details)
}

/// Decode a chat reply into the assistant's answer text
///
/// # Errors
///
/// - A status outside 200-299 fails with a server error carrying the code.
/// - A body without a string under `"response"` or `"reply"` fails as an
///   invalid response format.
pub fn parse_chat_response(status: u16, body: &str) -> AppResult<String> {
    if !(200..=299).contains(&status) {
        return Err(AppError::server_error(status));
    }

    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        AppError::invalid_response_format(format!("Failed to parse chat response: {e}"))
            .with_source(e)
    })?;

    value
        .get("response")
        .and_then(serde_json::Value::as_str)
        .or_else(|| value.get("reply").and_then(serde_json::Value::as_str))
        .map(ToOwned::to_owned)
        .ok_or_else(|| AppError::invalid_response_format("Invalid response format"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use crate::intelligence::suitability::SuitabilityStatus;

    const VALID_BODY: &str = r#"{
        "success": true,
        "details": {
            "brand": "Acme",
            "name": "Granola Bar",
            "type": "Snack",
            "ingredients": "oats, honey, almonds",
            "nutritionData": {
                "macronutrients": {
                    "calories": 190.0, "protein": 4.0, "carbohydrates": 29.0,
                    "fat": 7.0, "fiber": 3.0, "sugar": 11.0, "added_sugar": 8.0
                },
                "micronutrients": {
                    "sodium": 105.0, "potassium": 140.0, "calcium": 40.0, "iron": 1.1
                },
                "additionalMetrics": { "novaGroup": 3 }
            },
            "analysis": "Likely suitable for your profile."
        }
    }"#;

    #[test]
    fn test_valid_reply_decodes_to_record() {
        let details = parse_analysis_response(200, VALID_BODY).unwrap();
        assert_eq!(details.brand, "Acme");
        assert_eq!(details.nutrition_data.additional_metrics.nova_group, 3);
        assert_eq!(
            details.suitability_status(),
            SuitabilityStatus::LikelySuitable
        );
    }

    #[test]
    fn test_status_is_checked_before_body() {
        // A valid body does not rescue a failed transport
        let err = parse_analysis_response(500, VALID_BODY).unwrap_err();
        assert_eq!(err.code, ErrorCode::ExternalServiceError);
        assert_eq!(err.remote_status(), Some(500));
    }

    #[test]
    fn test_missing_success_marker_is_invalid_format() {
        let body = r#"{"details": {}}"#;
        let err = parse_analysis_response(200, body).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_malformed_body_is_invalid_format() {
        let err = parse_analysis_response(200, "not json at all").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_chat_reply_primary_key() {
        let answer = parse_chat_response(200, r#"{"response": "Yes, in moderation."}"#).unwrap();
        assert_eq!(answer, "Yes, in moderation.");
    }

    #[test]
    fn test_chat_reply_fallback_key() {
        let answer = parse_chat_response(200, r#"{"reply": "Avoid it."}"#).unwrap();
        assert_eq!(answer, "Avoid it.");
    }

    #[test]
    fn test_chat_reply_prefers_response_over_reply() {
        let body = r#"{"response": "first", "reply": "second"}"#;
        assert_eq!(parse_chat_response(200, body).unwrap(), "first");
    }

    #[test]
    fn test_chat_reply_without_either_key_is_invalid() {
        let err = parse_chat_response(200, r#"{"answer": "nope"}"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_chat_reply_non_string_value_is_invalid() {
        let err = parse_chat_response(200, r#"{"response": 42}"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }
}
