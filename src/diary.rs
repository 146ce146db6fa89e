// ABOUTME: Food diary service enforcing the one-saved-entry-per-barcode rule
// ABOUTME: Upsert-by-barcode on save, keyed deletes, newest-first listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food diary service
//!
//! Application-level policy over a [`SavedProductStore`]: a user keeps at
//! most one saved entry per barcode. Saving a barcode that already has an
//! entry replaces that entry's values while keeping its original id, so
//! references to the entry stay stable across re-scans.

use crate::database::SavedProductStore;
use crate::errors::AppResult;
use crate::models::SavedProduct;

/// Diary operations over an injected saved-product store
pub struct FoodDiaryService<S: SavedProductStore> {
    store: S,
}

impl<S: SavedProductStore> FoodDiaryService<S> {
    /// Wrap a store
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Save a product snapshot, upserting by barcode
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn save_product(&self, user_id: &str, product: SavedProduct) -> AppResult<()> {
        match self.store.find_by_barcode(user_id, &product.barcode).await? {
            Some(existing) => {
                let replacement = SavedProduct {
                    id: existing.id,
                    ..product
                };
                self.store.update(user_id, &replacement).await
            }
            None => self.store.insert(user_id, &product).await,
        }
    }

    /// Remove a saved entry by id
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn remove_product(&self, user_id: &str, product_id: &str) -> AppResult<()> {
        self.store.delete(user_id, product_id).await
    }

    /// All saved entries, newest first
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn saved_products(&self, user_id: &str) -> AppResult<Vec<SavedProduct>> {
        self.store.list(user_id).await
    }

    /// Whether a barcode already has a saved entry
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn is_product_saved(&self, user_id: &str, barcode: &str) -> AppResult<bool> {
        Ok(self.store.find_by_barcode(user_id, barcode).await?.is_some())
    }
}
