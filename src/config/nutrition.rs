// ABOUTME: Nutrition formula coefficient tables with evidence-based defaults
// ABOUTME: BMR coefficients, activity multipliers, and the fixed macro energy split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition calculation configuration
//!
//! Coefficient tables consumed by `crate::intelligence::nutrition_calculator`.
//! Defaults implement the Mifflin-St Jeor equation with the standard activity
//! factor table and a 30/50/20 protein/carb/fat energy split.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for
/// resting energy expenditure. American Journal of Clinical Nutrition, 51(2),
/// 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub female_constant: f64,
}

/// Activity factor multipliers for converting BMR to daily calories
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise
/// Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extra_active: f64,
}

/// Fixed macronutrient energy split applied to daily calories
///
/// Fractions are of total calories; each macro converts to grams with its own
/// energy density and is rounded independently of the others.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Fraction of calories from protein (0.30)
    pub protein_fraction: f64,
    /// Fraction of calories from carbohydrates (0.50)
    pub carbs_fraction: f64,
    /// Fraction of calories from fat (0.20)
    pub fat_fraction: f64,
}

/// Complete nutrition calculation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// BMR formula coefficients
    pub bmr: BmrConfig,
    /// Activity multiplier table
    pub activity_factors: ActivityFactorsConfig,
    /// Macro energy split
    pub macro_split: MacroSplitConfig,
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            bmr: BmrConfig {
                weight_coef: 10.0,
                height_coef: 6.25,
                age_coef: -5.0,
                male_constant: 5.0,
                female_constant: -161.0,
            },
            activity_factors: ActivityFactorsConfig {
                sedentary: 1.2,
                lightly_active: 1.375,
                moderately_active: 1.55,
                very_active: 1.725,
                extra_active: 1.9,
            },
            macro_split: MacroSplitConfig {
                protein_fraction: 0.30,
                carbs_fraction: 0.50,
                fat_fraction: 0.20,
            },
        }
    }
}

/// Global nutrition configuration singleton
static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

impl NutritionConfig {
    /// Get the global nutrition configuration
    #[must_use]
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(Self::default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_coefficients_match_mifflin_st_jeor() {
        let config = NutritionConfig::default();
        assert!((config.bmr.weight_coef - 10.0).abs() < f64::EPSILON);
        assert!((config.bmr.height_coef - 6.25).abs() < f64::EPSILON);
        assert!((config.bmr.male_constant - 5.0).abs() < f64::EPSILON);
        assert!((config.bmr.female_constant + 161.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_macro_split_sums_to_one() {
        let split = NutritionConfig::default().macro_split;
        let total = split.protein_fraction + split.carbs_fraction + split.fat_fraction;
        assert!((total - 1.0).abs() < 1e-9);
    }
}
