// ABOUTME: Composite health score engine combining BMI, conditions, and allergens
// ABOUTME: Produces the 0-100 score, narrative tier, contributing factors, and recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health score engine
//!
//! Derives the profile health report: a composite score starting from a
//! fixed base with per-condition and BMI deductions, a tier description, a
//! sentence naming the contributing factors, a structured report per
//! condition, and an ordered recommendation list.
//!
//! The score deduction and the contributing-factors sentence use different
//! BMI boundary pairs (30 vs 25 on the high side). That asymmetry is
//! inherited behavior, kept pending product clarification; do not unify the
//! thresholds.

use crate::constants::defaults::FALLBACK_BMI;
use crate::intelligence::condition_advisor::analyze_condition;
use crate::intelligence::physiological_constants::bmi::{NORMAL_MAX, UNDERWEIGHT_MAX};
use crate::intelligence::physiological_constants::health_score::{
    BASE_SCORE, BMI_MAJOR_HIGH, BMI_MAJOR_PENALTY, BMI_MINOR_LOW, BMI_MINOR_PENALTY,
    CONDITION_PENALTY, EXCELLENT_THRESHOLD, GOOD_THRESHOLD,
};
use crate::models::{HealthAnalysis, NutritionRecommendation, ProfileDocument};

/// Compute the derived health report for a profile
///
/// Always produces a result. A profile without a stored BMI is scored at the
/// fallback of 25.0 rather than failing.
#[must_use]
pub fn analyze_health_profile(doc: &ProfileDocument) -> HealthAnalysis {
    let conditions = &doc.profile.health_conditions;
    let allergens = &doc.profile.allergens;
    let bmi = doc.bmi.unwrap_or(FALLBACK_BMI);

    let mut score = BASE_SCORE;
    if !conditions.is_empty() {
        score -= CONDITION_PENALTY * conditions.len() as f64;
    }

    // The two bands are mutually exclusive: the minor deduction applies only
    // when the major one did not fire.
    if bmi < UNDERWEIGHT_MAX || bmi > BMI_MAJOR_HIGH {
        score -= BMI_MAJOR_PENALTY;
    } else if bmi < BMI_MINOR_LOW || bmi > NORMAL_MAX {
        score -= BMI_MINOR_PENALTY;
    }

    let condition_reports = conditions
        .iter()
        .map(|condition| analyze_condition(condition))
        .collect();

    let mut recommendations = vec![
        NutritionRecommendation {
            title: "Maintain proper hydration".to_owned(),
            description: "Drink at least 8 glasses of water daily to support metabolism and \
                          organ function."
                .to_owned(),
        },
        NutritionRecommendation {
            title: "Include more whole foods".to_owned(),
            description: "Focus on fruits, vegetables, lean proteins, and whole grains while \
                          minimizing processed foods."
                .to_owned(),
        },
    ];

    if conditions.iter().any(|c| c == "Diabetes") {
        recommendations.push(NutritionRecommendation {
            title: "Monitor carbohydrate intake".to_owned(),
            description: "Keep track of carbs and focus on complex carbohydrates with low \
                          glycemic index."
                .to_owned(),
        });
    }

    if conditions.iter().any(|c| c == "Hypertension") {
        recommendations.push(NutritionRecommendation {
            title: "Reduce sodium intake".to_owned(),
            description: "Limit salt consumption to less than 2,300mg per day and increase \
                          potassium-rich foods."
                .to_owned(),
        });
    }

    let score_description = if score >= EXCELLENT_THRESHOLD {
        "Your health score is excellent"
    } else if score >= GOOD_THRESHOLD {
        "Your health score is good"
    } else {
        "Your health score needs attention"
    }
    .to_owned();

    let mut detail_parts: Vec<&str> = Vec::new();
    if !conditions.is_empty() {
        detail_parts.push("your health conditions");
    }
    if !allergens.is_empty() {
        detail_parts.push("allergies");
    }
    // Note the 25 upper bound here, vs 30 in the deduction above
    if bmi < UNDERWEIGHT_MAX || bmi > NORMAL_MAX {
        detail_parts.push("BMI");
    }

    let score_detail = if detail_parts.is_empty() {
        "Based on your overall profile data.".to_owned()
    } else {
        format!("Based on {}.", detail_parts.join(", "))
    };

    HealthAnalysis {
        score,
        score_description,
        score_detail,
        conditions: condition_reports,
        recommendations,
    }
}
