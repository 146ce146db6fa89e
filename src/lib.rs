// ABOUTME: Main library entry point for the NutriGuide nutrition engine
// ABOUTME: Personalized nutrition targets, health scoring, and product suitability analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # NutriGuide Engine
//!
//! The computational core of a nutrition-tracking application: deterministic
//! calculations that turn biometric and health inputs into calorie/macro
//! targets, BMI classification, a composite health score, and
//! condition-specific guidance, plus the request/response contract for the
//! remote barcode-analysis and nutrition-chat services.
//!
//! ## Architecture
//!
//! - **Models**: typed profile, product, and report structures
//! - **Intelligence**: pure, side-effect-free calculation functions
//! - **Providers**: the external analysis service (the only async boundary)
//! - **Database**: injected storage seams; the real document store is a
//!   collaborator outside this crate
//!
//! Every function receives an immutable snapshot and returns a new value;
//! the engine holds no shared mutable state and never reaches into ambient
//! or global context.
//!
//! ## Example
//!
//! ```rust
//! use nutriguide_engine::models::{ActivityLevel, Gender, ProfileDocument, UserProfile};
//! use nutriguide_engine::intelligence::analyze_health_profile;
//!
//! let profile = UserProfile {
//!     height: Some(175.0),
//!     weight: Some(70.0),
//!     age: Some(30),
//!     gender: Some(Gender::Male),
//!     activity_level: Some(ActivityLevel::Sedentary),
//!     ..UserProfile::default()
//! };
//!
//! let doc = ProfileDocument::derive(&profile);
//! assert_eq!(doc.daily_calories, Some(2015.0));
//!
//! let report = analyze_health_profile(&doc);
//! assert!(report.score <= 100.0);
//! ```

/// Environment-driven configuration
pub mod config;

/// Application constants organized by domain
pub mod constants;

/// Storage seams for profiles and saved products
pub mod database;

/// Food diary service with the per-barcode uniqueness rule
pub mod diary;

/// Unified error handling
pub mod errors;

/// Deterministic nutrition and health algorithms
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Core data models
pub mod models;

/// Companion-device emergency payload sync
pub mod notifications;

/// Remote analysis and chat service access
pub mod providers;
