// ABOUTME: Store traits for profile and saved-product persistence, with in-memory implementations
// ABOUTME: The engine reaches storage only through these seams; the real document store is external
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Storage Seams
//!
//! The engine never reaches into ambient or global storage: callers inject
//! implementations of these traits. The production document store lives
//! outside this crate; the in-memory implementations here back tests and
//! embedded use.
//!
//! Profiles are keyed by an opaque user identifier. Saved products are keyed
//! by generated id, with the one-entry-per-barcode rule enforced by
//! [`crate::diary::FoodDiaryService`], not by the store.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::errors::AppResult;
use crate::models::{ProfileDocument, SavedProduct};

/// Keyed storage for user profile documents
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch a user's profile document, if one was ever persisted
    ///
    /// # Errors
    ///
    /// Returns a store-specific error when the backend is unreachable.
    async fn get_profile(&self, user_id: &str) -> AppResult<Option<ProfileDocument>>;

    /// Create or replace a user's profile document
    ///
    /// # Errors
    ///
    /// Returns a store-specific error when the write fails.
    async fn upsert_profile(&self, user_id: &str, doc: &ProfileDocument) -> AppResult<()>;
}

/// Per-user storage for saved product snapshots
#[async_trait]
pub trait SavedProductStore: Send + Sync {
    /// Insert a new snapshot under its generated id
    ///
    /// # Errors
    ///
    /// Returns a store-specific error when the write fails.
    async fn insert(&self, user_id: &str, product: &SavedProduct) -> AppResult<()>;

    /// Replace the snapshot with the same id
    ///
    /// # Errors
    ///
    /// Returns a store-specific error when the write fails.
    async fn update(&self, user_id: &str, product: &SavedProduct) -> AppResult<()>;

    /// Find a user's snapshot for a barcode, if any
    ///
    /// # Errors
    ///
    /// Returns a store-specific error when the backend is unreachable.
    async fn find_by_barcode(
        &self,
        user_id: &str,
        barcode: &str,
    ) -> AppResult<Option<SavedProduct>>;

    /// Delete a snapshot by id; deleting an absent id is not an error
    ///
    /// # Errors
    ///
    /// Returns a store-specific error when the write fails.
    async fn delete(&self, user_id: &str, product_id: &str) -> AppResult<()>;

    /// All of a user's snapshots, newest first
    ///
    /// # Errors
    ///
    /// Returns a store-specific error when the backend is unreachable.
    async fn list(&self, user_id: &str) -> AppResult<Vec<SavedProduct>>;
}

/// In-memory profile store
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    profiles: DashMap<String, ProfileDocument>,
}

impl MemoryProfileStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn get_profile(&self, user_id: &str) -> AppResult<Option<ProfileDocument>> {
        Ok(self.profiles.get(user_id).map(|entry| entry.value().clone()))
    }

    async fn upsert_profile(&self, user_id: &str, doc: &ProfileDocument) -> AppResult<()> {
        self.profiles.insert(user_id.to_owned(), doc.clone());
        Ok(())
    }
}

/// In-memory saved-product store
#[derive(Debug, Default)]
pub struct MemorySavedProductStore {
    products: DashMap<String, Vec<SavedProduct>>,
}

impl MemorySavedProductStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SavedProductStore for MemorySavedProductStore {
    async fn insert(&self, user_id: &str, product: &SavedProduct) -> AppResult<()> {
        self.products
            .entry(user_id.to_owned())
            .or_default()
            .push(product.clone());
        Ok(())
    }

    async fn update(&self, user_id: &str, product: &SavedProduct) -> AppResult<()> {
        if let Some(mut entry) = self.products.get_mut(user_id) {
            if let Some(existing) = entry.iter_mut().find(|p| p.id == product.id) {
                *existing = product.clone();
            }
        }
        Ok(())
    }

    async fn find_by_barcode(
        &self,
        user_id: &str,
        barcode: &str,
    ) -> AppResult<Option<SavedProduct>> {
        Ok(self.products.get(user_id).and_then(|entry| {
            entry.value().iter().find(|p| p.barcode == barcode).cloned()
        }))
    }

    async fn delete(&self, user_id: &str, product_id: &str) -> AppResult<()> {
        if let Some(mut entry) = self.products.get_mut(user_id) {
            entry.retain(|p| p.id != product_id);
        }
        Ok(())
    }

    async fn list(&self, user_id: &str) -> AppResult<Vec<SavedProduct>> {
        let mut products = self
            .products
            .get(user_id)
            .map_or_else(Vec::new, |entry| entry.value().clone());
        products.sort_by(|a, b| b.saved_date.cmp(&a.saved_date));
        Ok(products)
    }
}
