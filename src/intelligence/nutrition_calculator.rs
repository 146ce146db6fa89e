// ABOUTME: Daily energy and macronutrient target calculation
// ABOUTME: Mifflin-St Jeor BMR, activity-adjusted calories, fixed 30/50/20 macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Daily calorie and macronutrient targets from biometric inputs.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise
//!   Physiology* (activity factor table)
//!
//! These functions intentionally perform no input validation: they produce a
//! numeric result for any numeric input, degenerate values included.
//! Validating biometrics is a caller responsibility, which keeps the
//! calculator a total function and pushes policy to the edges.

use crate::config::nutrition::{ActivityFactorsConfig, BmrConfig, NutritionConfig};
use crate::intelligence::physiological_constants::energy_density::{
    KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
};
use crate::models::{ActivityLevel, Gender, NutritionTargets};

/// Biometric parameters for a daily target calculation
#[derive(Debug, Clone, Copy)]
pub struct TargetParams {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age: u32,
    /// Gender for the BMR constant
    pub gender: Gender,
    /// Activity level for the calorie multiplier
    pub activity_level: ActivityLevel,
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = 10 × weight + 6.25 × height − 5 × age + gender constant,
/// where the constant is +5 for males and −161 otherwise. Any gender that is
/// not male uses the female constant.
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let gender_constant = match gender {
        Gender::Male => config.male_constant,
        Gender::Female | Gender::Unspecified => config.female_constant,
    };

    config.weight_coef.mul_add(
        weight_kg,
        config
            .height_coef
            .mul_add(height_cm, config.age_coef * f64::from(age)),
    ) + gender_constant
}

/// The calorie multiplier for an activity level
#[must_use]
pub fn activity_multiplier(level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    match level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::LightlyActive => config.lightly_active,
        ActivityLevel::ModeratelyActive => config.moderately_active,
        ActivityLevel::VeryActive => config.very_active,
        ActivityLevel::ExtraActive => config.extra_active,
    }
}

/// Calculate daily calorie and macro targets for a biometric profile
///
/// Calories are BMR × activity multiplier, rounded to the nearest whole
/// kcal. The macro split is fixed at 30% protein / 50% carbohydrate / 20%
/// fat by calorie contribution, each converted to grams with its own energy
/// density and rounded independently. The rounded grams are not reconciled
/// back to the calorie total; the small drift is accepted.
#[must_use]
pub fn calculate_daily_targets(params: &TargetParams, config: &NutritionConfig) -> NutritionTargets {
    let bmr = calculate_mifflin_st_jeor(
        params.weight_kg,
        params.height_cm,
        params.age,
        params.gender,
        &config.bmr,
    );

    let multiplier = activity_multiplier(params.activity_level, &config.activity_factors);
    let calories = (bmr * multiplier).round();

    let split = &config.macro_split;
    NutritionTargets {
        calories,
        protein_g: (calories * split.protein_fraction / KCAL_PER_G_PROTEIN).round(),
        carbs_g: (calories * split.carbs_fraction / KCAL_PER_G_CARBS).round(),
        fat_g: (calories * split.fat_fraction / KCAL_PER_G_FAT).round(),
    }
}
