// ABOUTME: Body mass index calculation, classification, and display scale positioning
// ABOUTME: All mappings share the 18.5/25/30 breakpoints from physiological_constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body mass index calculation and classification
//!
//! BMI = weight(kg) / height(m)². The category, color, and description
//! mappings all classify against the same three breakpoints; the display
//! scale maps a BMI onto a four-segment track for the profile screen.
//!
//! None of these functions validate their input: a non-positive height
//! produces a non-finite BMI rather than an error, and it is the caller's
//! responsibility to validate biometrics before calculating.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

use super::physiological_constants::bmi::{
    MARKER_CENTER_OFFSET, NORMAL_MAX, OVERWEIGHT_MAX, SCALE_MAX, SCALE_MIN, UNDERWEIGHT_MAX,
};

/// BMI classification per the standard WHO bands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI of 30 or above
    Obese,
}

impl Display for BmiCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Underweight => write!(f, "Underweight"),
            Self::Normal => write!(f, "Normal"),
            Self::Overweight => write!(f, "Overweight"),
            Self::Obese => write!(f, "Obese"),
        }
    }
}

/// Calculate BMI from height in centimeters and weight in kilograms
///
/// Rounded to one decimal place. A height of zero yields an infinite value;
/// validation is a caller responsibility.
#[must_use]
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    (bmi * 10.0).round() / 10.0
}

/// Classify a BMI value
///
/// Boundaries are inclusive below, exclusive above: 18.5 is Normal, 25 is
/// Overweight, 30 is Obese.
#[must_use]
pub fn classify(bmi: f64) -> BmiCategory {
    if bmi < UNDERWEIGHT_MAX {
        BmiCategory::Underweight
    } else if bmi < NORMAL_MAX {
        BmiCategory::Normal
    } else if bmi < OVERWEIGHT_MAX {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Display color for a BMI value, on the same breakpoints as [`classify`]
#[must_use]
pub fn color_for(bmi: f64) -> &'static str {
    match classify(bmi) {
        BmiCategory::Underweight => "blue",
        BmiCategory::Normal => "green",
        BmiCategory::Overweight => "orange",
        BmiCategory::Obese => "red",
    }
}

/// One-sentence description for a BMI value, on the same breakpoints as
/// [`classify`]
#[must_use]
pub fn description_for(bmi: f64) -> &'static str {
    match classify(bmi) {
        BmiCategory::Underweight => {
            "You may need to gain some weight. Consider focusing on nutrient-dense foods."
        }
        BmiCategory::Normal => "Your weight is in the healthy range. Maintain your current habits.",
        BmiCategory::Overweight => {
            "You may benefit from losing some weight through diet and exercise."
        }
        BmiCategory::Obese => {
            "Your BMI indicates obesity, which increases health risks. Consider consulting a healthcare provider."
        }
    }
}

/// Marker offset for a BMI on the four-segment display scale
///
/// The track spans [15, 35] split into four equal-width segments with
/// boundaries at the classification breakpoints; BMI is clamped to the scale
/// and interpolated linearly within its segment. The marker correction keeps
/// the glyph centered over the computed position. Exact output matters for
/// visual regression tests.
#[must_use]
pub fn scale_position(bmi: f64, track_width: f64) -> f64 {
    let segment_width = track_width / 4.0;
    let clamped = bmi.clamp(SCALE_MIN, SCALE_MAX);

    let (segment_index, segment_start, segment_end): (f64, f64, f64) = if clamped < UNDERWEIGHT_MAX {
        (0.0, SCALE_MIN, UNDERWEIGHT_MAX)
    } else if clamped < NORMAL_MAX {
        (1.0, UNDERWEIGHT_MAX, NORMAL_MAX)
    } else if clamped < OVERWEIGHT_MAX {
        (2.0, NORMAL_MAX, OVERWEIGHT_MAX)
    } else {
        (3.0, OVERWEIGHT_MAX, SCALE_MAX)
    };

    let progress = (clamped - segment_start) / (segment_end - segment_start);
    segment_index.mul_add(segment_width, progress * segment_width) - MARKER_CENTER_OFFSET
}
