// ABOUTME: Contract tests for the nutrition-chat request/response exchange
// ABOUTME: Lenient profile requirements and the dual response/reply key fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Contract tests for the chat endpoint exchange
//!
//! Chat is the lenient side of the asymmetric contract: a profile that would
//! fail the analysis builder must still produce a chat payload. The reply
//! decoder accepts either of the two key names deployed services use.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriguide_engine::errors::ErrorCode;
use nutriguide_engine::models::ProfileDocument;
use nutriguide_engine::providers::requests::{build_analysis_request, build_chat_request};
use nutriguide_engine::providers::responses::parse_chat_response;

mod common;

#[test]
fn test_incomplete_profile_fails_analysis_but_not_chat() {
    let mut doc = common::reference_document();
    doc.profile.height = None;

    // Same document, both builders: the asymmetry is the contract
    let err = build_analysis_request(&doc, "1").unwrap_err();
    assert_eq!(err.missing_field(), Some("height"));

    let request = build_chat_request(&doc, "What should I avoid with hypertension?");
    assert_eq!(request.question, "What should I avoid with hypertension?");
}

#[test]
fn test_empty_profile_builds_defaulted_payload() {
    let request = build_chat_request(&ProfileDocument::default(), "Recommend a breakfast option");
    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(json["question"], "Recommend a breakfast option");
    assert_eq!(json["allergens"], serde_json::json!([]));
    assert_eq!(json["otherAllergens"], "");
    assert_eq!(json["medications"]["name"], "");
    // No biometrics in the chat payload at all
    assert!(json.get("height").is_none());
    assert!(json.get("weight").is_none());
    assert!(json.get("bmi").is_none());
}

#[test]
fn test_profile_lists_are_carried() {
    let request = build_chat_request(
        &common::rich_document(),
        "Can I eat a Spicy Chicken Sandwich?",
    );
    assert_eq!(
        request.health_conditions,
        vec!["Diabetes".to_owned(), "Hypertension".to_owned()]
    );
    assert_eq!(request.medications.name, "Metformin");
}

#[test]
fn test_reply_keys_in_fallback_order() {
    assert_eq!(
        parse_chat_response(200, r#"{"response": "Go ahead."}"#).unwrap(),
        "Go ahead."
    );
    assert_eq!(
        parse_chat_response(200, r#"{"reply": "Better not."}"#).unwrap(),
        "Better not."
    );
    assert_eq!(
        parse_chat_response(200, r#"{"response": "first", "reply": "second"}"#).unwrap(),
        "first"
    );
}

#[test]
fn test_unusable_replies_are_invalid_format() {
    for body in [
        r#"{"message": "hi"}"#,
        r#"{"response": 7}"#,
        r#"{"reply": null}"#,
        r"[1, 2, 3]",
        "plain text",
    ] {
        let err = parse_chat_response(200, body).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat, "body {body:?}");
    }
}

#[test]
fn test_chat_transport_failure_carries_status() {
    let err = parse_chat_response(502, r#"{"response": "ignored"}"#).unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert_eq!(err.remote_status(), Some(502));
}
