// ABOUTME: Suitability verdict extraction from free-text analysis narratives
// ABOUTME: Priority-ordered substring matching so specific phrases win over generic ones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Suitability classification
//!
//! The analysis service returns a free-text narrative; the verdict is
//! extracted by case-insensitive substring search in strict priority order.
//! "not suitable" and "likely suitable" both contain "suitable", so the more
//! specific phrases must be checked first; the order here is a contract, not
//! an optimization.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Enumerated suitability verdict for a scanned product
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SuitabilityStatus {
    /// The product fits the profile
    Suitable,
    /// The product probably fits the profile
    LikelySuitable,
    /// The product needs care with this profile
    Caution,
    /// The product conflicts with the profile
    NotSuitable,
    /// The narrative carried no recognizable verdict
    Unknown,
}

impl SuitabilityStatus {
    /// Extract the verdict from an analysis narrative
    ///
    /// First match wins, in this exact order: "not suitable", "likely
    /// suitable", "suitable", "caution"; anything else is Unknown.
    #[must_use]
    pub fn from_analysis(analysis: &str) -> Self {
        let lowered = analysis.to_lowercase();
        if lowered.contains("not suitable") {
            Self::NotSuitable
        } else if lowered.contains("likely suitable") {
            Self::LikelySuitable
        } else if lowered.contains("suitable") {
            Self::Suitable
        } else if lowered.contains("caution") {
            Self::Caution
        } else {
            Self::Unknown
        }
    }

    /// Display color for the verdict badge
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Suitable => "green",
            Self::LikelySuitable => "yellow",
            Self::Caution => "orange",
            Self::NotSuitable => "red",
            Self::Unknown => "gray",
        }
    }
}

impl Display for SuitabilityStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Suitable => write!(f, "Suitable"),
            Self::LikelySuitable => write!(f, "Likely Suitable"),
            Self::Caution => write!(f, "Use with Caution"),
            Self::NotSuitable => write!(f, "Not Suitable"),
            Self::Unknown => write!(f, "Unknown Status"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specific_phrases_win_over_generic() {
        assert_eq!(
            SuitabilityStatus::from_analysis("Likely Suitable for your profile"),
            SuitabilityStatus::LikelySuitable
        );
        assert_eq!(
            SuitabilityStatus::from_analysis("Not suitable due to allergens"),
            SuitabilityStatus::NotSuitable
        );
    }

    #[test]
    fn test_generic_and_caution_verdicts() {
        assert_eq!(
            SuitabilityStatus::from_analysis("This product is suitable for you"),
            SuitabilityStatus::Suitable
        );
        assert_eq!(
            SuitabilityStatus::from_analysis("Use with caution"),
            SuitabilityStatus::Caution
        );
    }

    #[test]
    fn test_no_verdict_is_unknown() {
        assert_eq!(
            SuitabilityStatus::from_analysis("no clear verdict"),
            SuitabilityStatus::Unknown
        );
    }

    #[test]
    fn test_not_suitable_beats_caution() {
        // Both phrases present: priority order decides
        assert_eq!(
            SuitabilityStatus::from_analysis("Not suitable; consume with caution"),
            SuitabilityStatus::NotSuitable
        );
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(SuitabilityStatus::Caution.to_string(), "Use with Caution");
        assert_eq!(SuitabilityStatus::Unknown.to_string(), "Unknown Status");
    }
}
