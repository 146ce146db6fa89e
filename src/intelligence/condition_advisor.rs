// ABOUTME: Per-condition dietary advice tables
// ABOUTME: One-line advice lookup plus structured severity/description/recommendation records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health condition advisory tables
//!
//! Two views over the condition knowledge base:
//!
//! - [`advice_for`]: a single sentence of dietary advice, matched
//!   case-insensitively against the known-condition table, with a templated
//!   fallback for anything else
//! - [`analyze_condition`]: a structured record (name, severity, description,
//!   recommendations) with curated entries for the conditions the health
//!   report elaborates on, matched against the exact labels the onboarding
//!   flow stores
//!
//! Downstream copy displays this text verbatim; edits here are user-visible.

use crate::models::ConditionReport;

/// One sentence of dietary advice for a health condition
///
/// Matches case-insensitively against the known conditions; anything
/// unmatched gets a generic sentence embedding the lowercased condition name.
#[must_use]
pub fn advice_for(condition: &str) -> String {
    match condition.to_lowercase().as_str() {
        "diabetes" => {
            "Monitor carbohydrate intake and focus on foods with a low glycemic index.".to_owned()
        }
        "hypertension" => {
            "Limit sodium intake to less than 2,300mg per day and increase potassium-rich foods."
                .to_owned()
        }
        "heart disease" => {
            "Focus on heart-healthy foods like whole grains, lean proteins, and healthy fats."
                .to_owned()
        }
        "kidney disease" => {
            "Monitor protein, phosphorus, sodium, and potassium intake based on your stage."
                .to_owned()
        }
        "irritable bowel syndrome" => {
            "Consider a low-FODMAP diet and identify personal trigger foods.".to_owned()
        }
        "celiac disease" => {
            "Strictly avoid all foods containing gluten, including many processed foods.".to_owned()
        }
        "gerd/acid reflux" => {
            "Avoid acidic foods, spicy foods, and eat smaller, more frequent meals.".to_owned()
        }
        other => format!("Follow dietary recommendations specific to your {other} condition."),
    }
}

/// A structured report for a health condition
///
/// Curated entries exist for the four conditions the health report
/// elaborates on, keyed by the exact labels the onboarding flow stores;
/// every other condition gets a generic moderate-severity record carrying
/// its own name.
#[must_use]
pub fn analyze_condition(condition: &str) -> ConditionReport {
    match condition {
        "Diabetes" => ConditionReport {
            name: "Type 2 Diabetes".to_owned(),
            severity: "Moderate".to_owned(),
            description: "A chronic condition affecting how your body metabolizes sugar. \
                          Regular monitoring of blood glucose levels is essential."
                .to_owned(),
            recommendations: vec![
                "Monitor carbohydrate intake carefully".to_owned(),
                "Eat smaller, regular meals throughout the day".to_owned(),
                "Focus on foods with low glycemic index".to_owned(),
                "Limit foods high in added sugars".to_owned(),
            ],
        },
        "Hypertension" => ConditionReport {
            name: "Hypertension".to_owned(),
            severity: "Moderate".to_owned(),
            description: "High blood pressure increases risk of heart disease and stroke. \
                          Dietary and lifestyle modifications are crucial."
                .to_owned(),
            recommendations: vec![
                "Reduce sodium intake to less than 2,300mg daily".to_owned(),
                "Consume potassium-rich foods like bananas and spinach".to_owned(),
                "Limit alcohol consumption".to_owned(),
                "Incorporate the DASH diet principles".to_owned(),
            ],
        },
        "Lactose Intolerance" => ConditionReport {
            name: "Lactose Intolerance".to_owned(),
            severity: "Low".to_owned(),
            description: "An inability to digest lactose, the sugar in dairy products, \
                          causing digestive discomfort."
                .to_owned(),
            recommendations: vec![
                "Use lactose-free dairy products".to_owned(),
                "Try plant-based milk alternatives".to_owned(),
                "Consider lactase enzyme supplements before consuming dairy".to_owned(),
                "Check food labels for hidden lactose ingredients".to_owned(),
            ],
        },
        "Celiac Disease" => ConditionReport {
            name: "Celiac Disease".to_owned(),
            severity: "High".to_owned(),
            description: "An autoimmune disorder where ingestion of gluten leads to damage \
                          of the small intestine."
                .to_owned(),
            recommendations: vec![
                "Strictly avoid all forms of gluten".to_owned(),
                "Focus on naturally gluten-free foods".to_owned(),
                "Be cautious of cross-contamination".to_owned(),
                "Look for certified gluten-free products".to_owned(),
            ],
        },
        other => ConditionReport {
            name: other.to_owned(),
            severity: "Moderate".to_owned(),
            description: "This condition requires dietary and lifestyle considerations for \
                          optimal health management."
                .to_owned(),
            recommendations: vec![
                "Consult with healthcare providers for specific advice".to_owned(),
                "Monitor symptoms and track food intake".to_owned(),
                "Stay consistent with prescribed medications".to_owned(),
            ],
        },
    }
}
