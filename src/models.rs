// ABOUTME: Core data models for the NutriGuide engine
// ABOUTME: Defines UserProfile, ProfileDocument, ProductDetails and other fundamental structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Core data structures used throughout the NutriGuide engine.
//!
//! ## Design Principles
//!
//! - **Typed profile**: the user profile is a proper structure with an
//!   explicit optional/required split, enforced at the request builders
//!   rather than ad hoc at each use site
//! - **Immutable records**: product records are immutable once constructed;
//!   derived values (suitability, health analysis) are computed on read
//! - **Serializable**: wire and persisted field names are preserved verbatim
//!   via serde renames
//!
//! ## Core Models
//!
//! - [`UserProfile`]: onboarding input owned by the user session
//! - [`ProfileDocument`]: the flat persisted profile, including derived fields
//! - [`ProductDetails`]: a normalized analysis-service response
//! - [`SavedProduct`]: a persisted snapshot of a scanned product
//! - [`HealthAnalysis`]: the derived health report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use uuid::Uuid;

use crate::intelligence::bmi::calculate_bmi;
use crate::intelligence::nutrition_calculator::{calculate_daily_targets, TargetParams};
use crate::intelligence::suitability::SuitabilityStatus;

/// Gender used for BMR calculation
///
/// Anything that is not recognizably male or female is carried as
/// [`Gender::Unspecified`]; the calculator applies the female constant to it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    /// Male (higher BMR constant)
    Male,
    /// Female (lower BMR constant)
    Female,
    /// Not specified or not a recognized label
    Unspecified,
}

impl Gender {
    /// Parse a free-form gender label, case-insensitively
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "male" => Self::Male,
            "female" => Self::Female,
            _ => Self::Unspecified,
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
            Self::Unspecified => write!(f, "Unspecified"),
        }
    }
}

/// Activity level for daily calorie calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Exercise 1-3 days/week
    #[serde(rename = "Lightly Active")]
    LightlyActive,
    /// Exercise 3-5 days/week
    #[serde(rename = "Moderately Active")]
    ModeratelyActive,
    /// Exercise 6-7 days/week
    #[serde(rename = "Very Active")]
    VeryActive,
    /// Hard training twice a day
    #[serde(rename = "Extra Active")]
    ExtraActive,
}

impl ActivityLevel {
    /// Parse an activity label, case-insensitively
    ///
    /// Unrecognized labels fall back to [`ActivityLevel::Sedentary`], which
    /// keeps the calorie calculation conservative for malformed input.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "lightly active" => Self::LightlyActive,
            "moderately active" => Self::ModeratelyActive,
            "very active" => Self::VeryActive,
            "extra active" => Self::ExtraActive,
            _ => Self::Sedentary,
        }
    }
}

impl Display for ActivityLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Sedentary => write!(f, "Sedentary"),
            Self::LightlyActive => write!(f, "Lightly Active"),
            Self::ModeratelyActive => write!(f, "Moderately Active"),
            Self::VeryActive => write!(f, "Very Active"),
            Self::ExtraActive => write!(f, "Extra Active"),
        }
    }
}

/// A medication the user takes
///
/// Free-text fields; the only save-time rule is a non-empty name, enforced by
/// the onboarding UI rather than here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Medication {
    /// Medication name
    pub name: String,
    /// Dosage, e.g. "500mg"
    pub dosage: String,
    /// Frequency, e.g. "twice daily"
    pub frequency: String,
    /// Free-form notes (never sent to the analysis service)
    #[serde(default)]
    pub notes: String,
}

/// Emergency contact details
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    /// Contact name
    pub name: String,
    /// Relationship to the user
    pub relationship: String,
    /// Phone number
    pub phone: String,
    /// Whether the contact authorized being listed
    pub is_authorized: bool,
}

/// The user profile collected during onboarding
///
/// Scalar biometric fields are optional: the required/optional split is a
/// contract of the request builders (`providers::requests`), not of the
/// profile itself. List fields default to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Height in centimeters
    pub height: Option<f64>,
    /// Weight in kilograms
    pub weight: Option<f64>,
    /// Age in years
    pub age: Option<u32>,
    /// Gender
    pub gender: Option<Gender>,
    /// Activity level
    pub activity_level: Option<ActivityLevel>,
    /// Selected allergens
    #[serde(default)]
    pub allergens: Vec<String>,
    /// Free-text additional allergens
    #[serde(default)]
    pub other_allergens: String,
    /// Selected food intolerances
    #[serde(default)]
    pub food_intolerances: Vec<String>,
    /// Selected health conditions
    #[serde(default)]
    pub health_conditions: Vec<String>,
    /// Free-text additional health conditions
    #[serde(default)]
    pub other_health_conditions: String,
    /// Selected dietary preferences
    #[serde(default)]
    pub dietary_preferences: Vec<String>,
    /// Free-text additional dietary preferences
    #[serde(default)]
    pub other_dietary_preferences: String,
    /// Medications, in the order the user entered them
    #[serde(default)]
    pub medications: Vec<Medication>,
    /// Emergency contact
    pub emergency_contact: Option<EmergencyContact>,
}

/// Daily nutrition targets derived from the profile
///
/// All values are whole units (the calculator rounds each independently).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutritionTargets {
    /// Daily calories (kcal)
    pub calories: f64,
    /// Daily protein (grams)
    pub protein_g: f64,
    /// Daily carbohydrates (grams)
    pub carbs_g: f64,
    /// Daily fat (grams)
    pub fat_g: f64,
}

/// The flat persisted form of a profile, as held by the profile store
///
/// Carries every [`UserProfile`] field plus the derived values the store
/// persists alongside them. Derived fields are pure functions of the
/// biometric inputs; [`ProfileDocument::derive`] recomputes them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDocument {
    /// Onboarding fields
    #[serde(flatten)]
    pub profile: UserProfile,
    /// Derived body mass index, 1 decimal
    pub bmi: Option<f64>,
    /// Derived daily calorie target
    pub daily_calories: Option<f64>,
    /// Derived daily protein target (grams)
    pub daily_protein: Option<f64>,
    /// Derived daily carbohydrate target (grams)
    pub daily_carbs: Option<f64>,
    /// Derived daily fat target (grams)
    pub daily_fat: Option<f64>,
    /// Whether onboarding finished with a complete biometric set
    #[serde(default)]
    pub onboarding_completed: bool,
    /// First persisted
    pub created_at: Option<DateTime<Utc>>,
    /// Last persisted
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProfileDocument {
    /// Build the persisted document from an onboarding profile
    ///
    /// When the full biometric set (height, weight, age, gender, activity
    /// level) is present, computes BMI and the daily targets and marks
    /// onboarding complete. Otherwise the derived fields stay `None` and the
    /// document represents a partial profile, which chat accepts and barcode
    /// analysis rejects.
    #[must_use]
    pub fn derive(profile: &UserProfile) -> Self {
        let now = Utc::now();
        let mut doc = Self {
            profile: profile.clone(),
            created_at: Some(now),
            updated_at: Some(now),
            ..Self::default()
        };
        doc.recompute();
        doc
    }

    /// Recompute the derived fields from the current biometric inputs
    pub fn recompute(&mut self) {
        let (Some(height), Some(weight), Some(age), Some(gender), Some(activity_level)) = (
            self.profile.height,
            self.profile.weight,
            self.profile.age,
            self.profile.gender,
            self.profile.activity_level,
        ) else {
            return;
        };

        let targets = calculate_daily_targets(
            &TargetParams {
                weight_kg: weight,
                height_cm: height,
                age,
                gender,
                activity_level,
            },
            crate::config::NutritionConfig::global(),
        );

        self.bmi = Some(calculate_bmi(height, weight));
        self.daily_calories = Some(targets.calories);
        self.daily_protein = Some(targets.protein_g);
        self.daily_carbs = Some(targets.carbs_g);
        self.daily_fat = Some(targets.fat_g);
        self.onboarding_completed = true;
        self.updated_at = Some(Utc::now());
    }
}

/// Macronutrient values reported by the analysis service, per serving
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Macronutrients {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (grams)
    pub protein: f64,
    /// Carbohydrates (grams)
    pub carbohydrates: f64,
    /// Fat (grams)
    pub fat: f64,
    /// Fiber (grams)
    pub fiber: f64,
    /// Total sugar (grams)
    pub sugar: f64,
    /// Added sugar (grams); the service reports this key in snake case
    pub added_sugar: f64,
}

/// Micronutrient values reported by the analysis service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Micronutrients {
    /// Sodium (mg)
    pub sodium: f64,
    /// Potassium (mg)
    pub potassium: f64,
    /// Calcium (mg)
    pub calcium: f64,
    /// Iron (mg)
    pub iron: f64,
}

/// Additional product metrics reported by the analysis service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalMetrics {
    /// NOVA food-processing classification, 1 (minimally processed) to 4
    /// (ultra-processed)
    pub nova_group: u8,
}

/// Full nutrition block of an analysis response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionData {
    /// Macronutrients
    pub macronutrients: Macronutrients,
    /// Micronutrients
    pub micronutrients: Micronutrients,
    /// Processing classification and other extras
    pub additional_metrics: AdditionalMetrics,
}

/// A normalized product record from the analysis service
///
/// Immutable once constructed. The suitability verdict is derived from the
/// analysis narrative on read and never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDetails {
    /// Brand name
    pub brand: String,
    /// Product name
    pub name: String,
    /// Product category
    #[serde(rename = "type")]
    pub product_type: String,
    /// Ingredient list text
    pub ingredients: String,
    /// Nutrition values
    #[serde(rename = "nutritionData")]
    pub nutrition_data: NutritionData,
    /// Free-text suitability narrative from the service
    pub analysis: String,
}

impl ProductDetails {
    /// Suitability verdict derived from the analysis narrative
    #[must_use]
    pub fn suitability_status(&self) -> SuitabilityStatus {
        SuitabilityStatus::from_analysis(&self.analysis)
    }
}

/// A persisted snapshot of a scanned product
///
/// Identity is a generated id; the caller-side diary service keeps at most
/// one entry per barcode per user (upsert-by-barcode).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedProduct {
    /// Generated identifier
    pub id: String,
    /// Brand name
    pub brand: String,
    /// Product name
    pub name: String,
    /// Barcode the product was scanned from
    pub barcode: String,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (grams)
    pub protein: f64,
    /// Carbohydrates (grams)
    pub carbs: f64,
    /// Fat (grams)
    pub fat: f64,
    /// Suitability verdict label at save time
    pub suitability_status: String,
    /// Analysis narrative at save time
    pub analysis: String,
    /// NOVA processing group
    pub nova_group: u8,
    /// Save timestamp
    pub saved_date: DateTime<Utc>,
}

impl SavedProduct {
    /// Snapshot a product record under its originating barcode
    #[must_use]
    pub fn from_details(details: &ProductDetails, barcode: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            brand: details.brand.clone(),
            name: details.name.clone(),
            barcode: barcode.to_owned(),
            calories: details.nutrition_data.macronutrients.calories,
            protein: details.nutrition_data.macronutrients.protein,
            carbs: details.nutrition_data.macronutrients.carbohydrates,
            fat: details.nutrition_data.macronutrients.fat,
            suitability_status: details.suitability_status().to_string(),
            analysis: details.analysis.clone(),
            nova_group: details.nutrition_data.additional_metrics.nova_group,
            saved_date: Utc::now(),
        }
    }
}

/// One actionable nutrition recommendation in a health report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NutritionRecommendation {
    /// Short imperative title
    pub title: String,
    /// Explanatory detail
    pub description: String,
}

/// A structured explanation of one health condition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConditionReport {
    /// Display name (may differ from the profile's raw condition string)
    pub name: String,
    /// Severity label: "Low", "Moderate" or "High"
    pub severity: String,
    /// What the condition means for nutrition
    pub description: String,
    /// Condition-specific dietary recommendations
    pub recommendations: Vec<String>,
}

/// The derived health report for a profile
///
/// Fully derived and recomputed on each view; the engine never persists it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthAnalysis {
    /// Composite score, 0-100
    pub score: f64,
    /// One-line tier description
    pub score_description: String,
    /// Sentence naming the contributing factors
    pub score_detail: String,
    /// One report per profile condition, in profile order
    pub conditions: Vec<ConditionReport>,
    /// Base recommendations plus condition-triggered extras, in fixed order
    pub recommendations: Vec<NutritionRecommendation>,
}

/// One message in a nutrition-assistant conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Generated identifier
    pub id: String,
    /// Message text
    pub text: String,
    /// Whether the user (true) or the assistant (false) wrote it
    pub is_from_user: bool,
    /// Creation time
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(text: impl Into<String>, is_from_user: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            is_from_user,
            timestamp: Utc::now(),
        }
    }

    /// A message written by the user
    #[must_use]
    pub fn from_user(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }

    /// A message written by the assistant
    #[must_use]
    pub fn from_assistant(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    /// The assistant's opening greeting
    #[must_use]
    pub fn greeting() -> Self {
        Self::from_assistant(
            "Hello! I'm your nutrition assistant. I can answer questions about food and \
             nutrition based on your dietary profile. How can I help you today?",
        )
    }

    /// The assistant's canned reply when no profile exists yet
    #[must_use]
    pub fn profile_required() -> Self {
        Self::from_assistant(
            "I need more information about your dietary needs to provide personalized \
             advice. Please complete your profile first.",
        )
    }

    /// The assistant's canned usage-help message
    #[must_use]
    pub fn help() -> Self {
        Self::from_assistant(
            "You can ask me questions about specific foods, restaurants, recipes, or general \
             nutrition advice based on your dietary profile. For example:\n\n\
             \u{2022} Can I eat a Spicy Chicken Sandwich from Chick-fil-A?\n\
             \u{2022} Is Greek yogurt suitable for someone with lactose intolerance?\n\
             \u{2022} What should I avoid with hypertension?\n\
             \u{2022} Recommend me a breakfast option",
        )
    }
}
