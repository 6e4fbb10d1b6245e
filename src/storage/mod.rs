pub mod json_store;

pub use json_store::JsonFileStore;

use thiserror::Error;

use crate::models::product::Product;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persistence hook for catalog contents.
///
/// The catalog manager calls through this trait and mandates nothing about
/// the format behind it. `load` of a store that has never been saved to
/// returns an empty catalog, not an error.
pub trait CatalogStore: Send + Sync {
    fn save(&self, products: &[Product]) -> Result<(), StoreError>;
    fn load(&self) -> Result<Vec<Product>, StoreError>;
}
