// ABOUTME: Intelligence module housing the deterministic nutrition and health algorithms
// ABOUTME: BMI classification, energy/macro targets, condition advice, health scoring, suitability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! The deterministic core of the NutriGuide engine: every function here is a
//! side-effect-free transformation of an immutable profile or record snapshot.
//! Nothing in this module performs I/O, retries, or synchronization.
//!
//! - [`bmi`]: body mass index calculation, classification, and display scale
//! - [`nutrition_calculator`]: Mifflin-St Jeor BMR and daily macro targets
//! - [`condition_advisor`]: per-condition dietary advice tables
//! - [`health_score`]: the composite 0-100 health score and report
//! - [`suitability`]: verdict extraction from analysis narratives

/// Body mass index calculation and classification
pub mod bmi;
/// Per-condition dietary advice tables
pub mod condition_advisor;
/// Composite health score and report generation
pub mod health_score;
/// Daily energy and macronutrient target calculation
pub mod nutrition_calculator;
/// Classification thresholds and scoring constants
pub mod physiological_constants;
/// Suitability verdict extraction
pub mod suitability;

pub use bmi::{calculate_bmi, BmiCategory};
pub use condition_advisor::{advice_for, analyze_condition};
pub use health_score::analyze_health_profile;
pub use nutrition_calculator::{
    calculate_daily_targets, calculate_mifflin_st_jeor, TargetParams,
};
pub use suitability::SuitabilityStatus;
