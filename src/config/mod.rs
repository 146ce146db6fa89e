// ABOUTME: Configuration module for the NutriGuide engine
// ABOUTME: Environment-driven service settings and formula coefficient tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration management
//!
//! Environment-only configuration: service settings come from environment
//! variables with sensible defaults, formula coefficients from a process-wide
//! default table. No configuration files.

/// Environment-based service configuration
pub mod environment;
/// Nutrition formula coefficients (BMR, activity factors, macro split)
pub mod nutrition;

pub use environment::ServiceConfig;
pub use nutrition::{ActivityFactorsConfig, BmrConfig, MacroSplitConfig, NutritionConfig};
