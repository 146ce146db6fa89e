// ABOUTME: Outbound request payloads for the analysis and chat endpoints
// ABOUTME: Strict field requirements for analysis, lenient defaulting for chat
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Request construction
//!
//! Assembles the JSON payloads the remote service expects, from a stored
//! profile document. Two policies:
//!
//! - **Analysis** ([`build_analysis_request`]): every biometric scalar is
//!   required; the first absent one fails the build with a missing-field
//!   error. List fields default to empty.
//! - **Chat** ([`build_chat_request`]): everything is optional; an empty
//!   profile still produces a valid payload.
//!
//! Only the first medication is sent, as a name/dosage/frequency triple.
//! This truncation is a deliberate wire-contract simplification, and
//! medication notes never leave the device.

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::ProfileDocument;

/// The single-medication triple the service accepts
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MedicationInfo {
    /// Medication name, empty when the profile lists none
    pub name: String,
    /// Dosage
    pub dosage: String,
    /// Frequency
    pub frequency: String,
}

impl MedicationInfo {
    fn from_profile(doc: &ProfileDocument) -> Self {
        doc.profile.medications.first().map_or_else(Self::default, |med| Self {
            name: med.name.clone(),
            dosage: med.dosage.clone(),
            frequency: med.frequency.clone(),
        })
    }
}

/// Payload for `POST /getDetailsFromBarcode`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// Scanned barcode
    pub barcode: String,
    /// Height in centimeters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// Age in years
    pub age: u32,
    /// Derived body mass index
    pub bmi: f64,
    /// Gender label
    pub gender: String,
    /// Activity level label
    pub activity_level: String,
    /// Selected allergens
    pub allergens: Vec<String>,
    /// Free-text additional allergens
    pub other_allergens: String,
    /// Selected food intolerances
    pub food_intolerances: Vec<String>,
    /// Selected health conditions
    pub health_conditions: Vec<String>,
    /// Selected dietary preferences
    pub dietary_preferences: Vec<String>,
    /// Free-text additional dietary preferences
    pub other_dietary_preferences: String,
    /// First medication only
    pub medications: MedicationInfo,
}

/// Payload for `POST /getRestaurantSuggestion`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// The user's free-text question
    pub question: String,
    /// Selected allergens
    pub allergens: Vec<String>,
    /// Free-text additional allergens
    pub other_allergens: String,
    /// Selected food intolerances
    pub food_intolerances: Vec<String>,
    /// Selected health conditions
    pub health_conditions: Vec<String>,
    /// Selected dietary preferences
    pub dietary_preferences: Vec<String>,
    /// Free-text additional dietary preferences
    pub other_dietary_preferences: String,
    /// First medication only
    pub medications: MedicationInfo,
}

/// Build the barcode-analysis payload from a stored profile
///
/// # Errors
///
/// Fails with a missing-field error naming the first absent required scalar,
/// checked in this order: height, weight, age, bmi, gender, activityLevel.
/// A profile that has not finished onboarding cannot be analyzed; the caller
/// should prompt for profile completion rather than retry.
pub fn build_analysis_request(
    doc: &ProfileDocument,
    barcode: &str,
) -> AppResult<AnalysisRequest> {
    let height = doc
        .profile
        .height
        .ok_or_else(|| AppError::missing_profile_field("height"))?;
    let weight = doc
        .profile
        .weight
        .ok_or_else(|| AppError::missing_profile_field("weight"))?;
    let age = doc
        .profile
        .age
        .ok_or_else(|| AppError::missing_profile_field("age"))?;
    let bmi = doc
        .bmi
        .ok_or_else(|| AppError::missing_profile_field("bmi"))?;
    let gender = doc
        .profile
        .gender
        .ok_or_else(|| AppError::missing_profile_field("gender"))?;
    let activity_level = doc
        .profile
        .activity_level
        .ok_or_else(|| AppError::missing_profile_field("activityLevel"))?;

    Ok(AnalysisRequest {
        barcode: barcode.to_owned(),
        height,
        weight,
        age,
        bmi,
        gender: gender.to_string(),
        activity_level: activity_level.to_string(),
        allergens: doc.profile.allergens.clone(),
        other_allergens: doc.profile.other_allergens.clone(),
        food_intolerances: doc.profile.food_intolerances.clone(),
        health_conditions: doc.profile.health_conditions.clone(),
        dietary_preferences: doc.profile.dietary_preferences.clone(),
        other_dietary_preferences: doc.profile.other_dietary_preferences.clone(),
        medications: MedicationInfo::from_profile(doc),
    })
}

/// Build the chat payload from a stored profile
///
/// Never fails: chat does not require a complete profile, so every field
/// falls back to its empty default. The question is carried verbatim.
#[must_use]
pub fn build_chat_request(doc: &ProfileDocument, question: &str) -> ChatRequest {
    ChatRequest {
        question: question.to_owned(),
        allergens: doc.profile.allergens.clone(),
        other_allergens: doc.profile.other_allergens.clone(),
        food_intolerances: doc.profile.food_intolerances.clone(),
        health_conditions: doc.profile.health_conditions.clone(),
        dietary_preferences: doc.profile.dietary_preferences.clone(),
        other_dietary_preferences: doc.profile.other_dietary_preferences.clone(),
        medications: MedicationInfo::from_profile(doc),
    }
}
