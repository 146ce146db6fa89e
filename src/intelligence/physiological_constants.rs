// ABOUTME: Classification thresholds and scoring constants for the intelligence algorithms
// ABOUTME: BMI breakpoints, display scale bounds, health score weights, macro energy densities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological constants used by the intelligence algorithms
//!
//! Classification thresholds are shared between every mapping that consumes
//! them (category, color, description, display scale) so the breakpoints
//! cannot drift apart.

/// BMI classification thresholds
///
/// Reference: WHO BMI classification. Boundaries are inclusive on the lower
/// bound and exclusive on the upper: a BMI of exactly 18.5 is Normal.
pub mod bmi {
    /// Below this value: underweight
    pub const UNDERWEIGHT_MAX: f64 = 18.5;
    /// Below this value (and at least `UNDERWEIGHT_MAX`): normal
    pub const NORMAL_MAX: f64 = 25.0;
    /// Below this value (and at least `NORMAL_MAX`): overweight
    pub const OVERWEIGHT_MAX: f64 = 30.0;

    /// Lower bound of the four-segment display scale
    pub const SCALE_MIN: f64 = 15.0;
    /// Upper bound of the four-segment display scale
    pub const SCALE_MAX: f64 = 35.0;
    /// Horizontal correction applied to center the marker glyph on the track
    pub const MARKER_CENTER_OFFSET: f64 = 10.0;
}

/// Health score weights and tier boundaries
pub mod health_score {
    /// Every profile starts from this score
    pub const BASE_SCORE: f64 = 85.0;
    /// Deducted once per reported health condition
    pub const CONDITION_PENALTY: f64 = 5.0;
    /// Deducted when BMI is outside [18.5, 30]
    pub const BMI_MAJOR_PENALTY: f64 = 10.0;
    /// Deducted when BMI is outside [18.9, 25] and the major band did not fire
    pub const BMI_MINOR_PENALTY: f64 = 5.0;
    /// Lower bound of the minor deduction band
    pub const BMI_MINOR_LOW: f64 = 18.9;
    /// Upper bound of the major deduction band
    ///
    /// The contributing-factors sentence uses the 25.0 classification bound
    /// instead; the mismatch is inherited behavior, kept deliberately.
    pub const BMI_MAJOR_HIGH: f64 = 30.0;

    /// Scores at or above this are "excellent"
    pub const EXCELLENT_THRESHOLD: f64 = 80.0;
    /// Scores at or above this (and below excellent) are "good"
    pub const GOOD_THRESHOLD: f64 = 60.0;
}

/// Macronutrient energy densities (kcal per gram)
///
/// Reference: Atwater general factors
pub mod energy_density {
    /// Protein: 4 kcal/g
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Carbohydrates: 4 kcal/g
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}
