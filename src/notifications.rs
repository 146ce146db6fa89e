// ABOUTME: Emergency-info payload for the companion-device sync sink
// ABOUTME: Flattens name, contact, conditions, allergens, and medications into one push
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Companion-device notifications
//!
//! One-way push of a flattened emergency payload to a companion device. The
//! transport is a collaborator behind [`EmergencySink`]; the engine only
//! builds the payload and fires it, and never waits for an acknowledgement.

use serde::{Deserialize, Serialize};

use crate::models::{Medication, ProfileDocument};

/// The flattened emergency payload a companion device displays
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyInfo {
    /// The user's display name
    pub name: String,
    /// Emergency contact name
    pub emergency_contact_name: String,
    /// Emergency contact relationship
    pub emergency_contact_relationship: String,
    /// Emergency contact phone
    pub emergency_contact_phone: String,
    /// Reported health conditions
    pub health_conditions: Vec<String>,
    /// Reported allergens
    pub allergens: Vec<String>,
    /// Full medication list, notes included
    pub medications: Vec<Medication>,
}

impl EmergencyInfo {
    /// Flatten a profile document into the emergency payload
    #[must_use]
    pub fn from_document(doc: &ProfileDocument, display_name: &str) -> Self {
        let contact = doc.profile.emergency_contact.clone().unwrap_or_default();
        Self {
            name: display_name.to_owned(),
            emergency_contact_name: contact.name,
            emergency_contact_relationship: contact.relationship,
            emergency_contact_phone: contact.phone,
            health_conditions: doc.profile.health_conditions.clone(),
            allergens: doc.profile.allergens.clone(),
            medications: doc.profile.medications.clone(),
        }
    }
}

/// A fire-and-forget sink for emergency payloads
///
/// Implementations deliver the payload to a companion device. Delivery is
/// best-effort: the engine neither waits nor retries.
pub trait EmergencySink: Send + Sync {
    /// Push the payload toward the device
    fn push(&self, info: &EmergencyInfo);
}
