// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Complete profile documents and product record builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code)]

use nutriguide_engine::models::{
    ActivityLevel, AdditionalMetrics, Gender, Macronutrients, Medication, Micronutrients,
    NutritionData, ProductDetails, ProfileDocument, UserProfile,
};

/// The reference male profile used across the test suite:
/// 70kg, 175cm, 30 years, sedentary
pub fn reference_profile() -> UserProfile {
    UserProfile {
        height: Some(175.0),
        weight: Some(70.0),
        age: Some(30),
        gender: Some(Gender::Male),
        activity_level: Some(ActivityLevel::Sedentary),
        ..UserProfile::default()
    }
}

/// A fully onboarded document derived from the reference profile
pub fn reference_document() -> ProfileDocument {
    ProfileDocument::derive(&reference_profile())
}

/// A document with conditions, allergens, and medications filled in
pub fn rich_document() -> ProfileDocument {
    let mut profile = reference_profile();
    profile.health_conditions = vec!["Diabetes".to_owned(), "Hypertension".to_owned()];
    profile.allergens = vec!["Peanuts".to_owned(), "Shellfish".to_owned()];
    profile.dietary_preferences = vec!["Low Carb".to_owned()];
    profile.medications = vec![
        Medication {
            name: "Metformin".to_owned(),
            dosage: "500mg".to_owned(),
            frequency: "twice daily".to_owned(),
            notes: "with meals".to_owned(),
        },
        Medication {
            name: "Lisinopril".to_owned(),
            dosage: "10mg".to_owned(),
            frequency: "daily".to_owned(),
            notes: String::new(),
        },
    ];
    ProfileDocument::derive(&profile)
}

/// A product record the analysis service could plausibly return
pub fn granola_bar(analysis: &str) -> ProductDetails {
    ProductDetails {
        brand: "Acme".to_owned(),
        name: "Granola Bar".to_owned(),
        product_type: "Snack".to_owned(),
        ingredients: "oats, honey, almonds, salt".to_owned(),
        nutrition_data: NutritionData {
            macronutrients: Macronutrients {
                calories: 190.0,
                protein: 4.0,
                carbohydrates: 29.0,
                fat: 7.0,
                fiber: 3.0,
                sugar: 11.0,
                added_sugar: 8.0,
            },
            micronutrients: Micronutrients {
                sodium: 105.0,
                potassium: 140.0,
                calcium: 40.0,
                iron: 1.1,
            },
            additional_metrics: AdditionalMetrics { nova_group: 3 },
        },
        analysis: analysis.to_owned(),
    }
}
