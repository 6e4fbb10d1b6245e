use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::product::Product;
use crate::storage::{CatalogStore, StoreError};

/// On-disk snapshot envelope. The timestamp records when the catalog was
/// last saved; it is informational and ignored on load.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogSnapshot {
    saved_at: DateTime<Utc>,
    products: Vec<Product>,
}

/// JSON-file implementation of [`CatalogStore`].
///
/// The whole catalog is written as one pretty-printed snapshot on every
/// save. Fine for catalogs of tens to low thousands of items.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for JsonFileStore {
    fn save(&self, products: &[Product]) -> Result<(), StoreError> {
        let snapshot = CatalogSnapshot {
            saved_at: Utc::now(),
            products: products.to_vec(),
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        fs::write(&self.path, json).map_err(|e| {
            tracing::error!("Failed to write catalog to {}: {}", self.path.display(), e);
            StoreError::Io(e)
        })?;

        tracing::info!(
            "Saved {} products to {}",
            products.len(),
            self.path.display()
        );
        Ok(())
    }

    fn load(&self) -> Result<Vec<Product>, StoreError> {
        if !self.path.exists() {
            tracing::debug!(
                "No catalog file at {}, starting with an empty catalog",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path)?;
        let snapshot: CatalogSnapshot = serde_json::from_str(&raw)?;

        tracing::info!(
            "Loaded {} products from {}",
            snapshot.products.len(),
            self.path.display()
        );
        Ok(snapshot.products)
    }
}
