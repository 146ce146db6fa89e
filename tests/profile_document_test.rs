// ABOUTME: Tests for onboarding completion and the persisted profile document
// ABOUTME: Derived fields, wire key names, recomputation, and the profile store seam
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Profile document integration tests
//!
//! Onboarding derives BMI and daily targets into the persisted document;
//! both are pure functions of the biometric inputs, and the document's wire
//! form carries the exact field names the store persists.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use nutriguide_engine::database::{MemoryProfileStore, ProfileStore};
use nutriguide_engine::models::ProfileDocument;

mod common;

#[test]
fn test_derive_computes_bmi_and_targets() {
    let doc = common::reference_document();
    assert_eq!(doc.bmi, Some(22.9));
    assert_eq!(doc.daily_calories, Some(2015.0));
    assert_eq!(doc.daily_protein, Some(151.0));
    assert_eq!(doc.daily_carbs, Some(252.0));
    assert_eq!(doc.daily_fat, Some(45.0));
    assert!(doc.onboarding_completed);
    assert!(doc.created_at.is_some());
}

#[test]
fn test_partial_profile_derives_no_targets() {
    let mut profile = common::reference_profile();
    profile.age = None;
    let doc = ProfileDocument::derive(&profile);
    assert_eq!(doc.bmi, None);
    assert_eq!(doc.daily_calories, None);
    assert!(!doc.onboarding_completed);
}

#[test]
fn test_derived_fields_are_pure_functions_of_biometrics() {
    let first = common::reference_document();
    let second = common::reference_document();
    assert_eq!(first.bmi, second.bmi);
    assert_eq!(first.daily_calories, second.daily_calories);
    assert_eq!(first.daily_protein, second.daily_protein);
}

#[test]
fn test_recompute_follows_biometric_changes() {
    let mut doc = common::reference_document();
    doc.profile.weight = Some(80.0);
    doc.recompute();
    // 80 / 1.75^2 = 26.1
    assert_eq!(doc.bmi, Some(26.1));
    // BMR 1748.75, calories round(1748.75 * 1.2) = round(2098.5) = 2099
    assert_eq!(doc.daily_calories, Some(2099.0));
}

#[test]
fn test_wire_keys_match_the_persisted_document() {
    let json = serde_json::to_value(common::reference_document()).unwrap();
    for key in [
        "height",
        "weight",
        "age",
        "gender",
        "activityLevel",
        "bmi",
        "dailyCalories",
        "dailyProtein",
        "dailyCarbs",
        "dailyFat",
        "allergens",
        "otherAllergens",
        "foodIntolerances",
        "healthConditions",
        "otherHealthConditions",
        "dietaryPreferences",
        "otherDietaryPreferences",
        "medications",
        "onboardingCompleted",
    ] {
        assert!(json.get(key).is_some(), "missing wire key {key}");
    }
}

#[tokio::test]
async fn test_profile_store_round_trip() {
    let store = MemoryProfileStore::new();
    assert!(store.get_profile("u1").await.unwrap().is_none());

    let doc = common::rich_document();
    store.upsert_profile("u1", &doc).await.unwrap();

    let loaded = store.get_profile("u1").await.unwrap().unwrap();
    assert_eq!(loaded.bmi, doc.bmi);
    assert_eq!(
        loaded.profile.health_conditions,
        doc.profile.health_conditions
    );

    // Upsert replaces
    let mut updated = doc.clone();
    updated.profile.allergens.push("Soy".to_owned());
    store.upsert_profile("u1", &updated).await.unwrap();
    let reloaded = store.get_profile("u1").await.unwrap().unwrap();
    assert!(reloaded.profile.allergens.contains(&"Soy".to_owned()));
}
