use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::product::Product;
use crate::storage::{CatalogStore, StoreError};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Product already exists with ID: {id}")]
    DuplicateIdentifier { id: String },

    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),
}

/// Result of a delete-by-identifier request. Not finding the product is a
/// normal outcome the caller observes, never an error.
#[derive(Debug)]
pub enum DeleteOutcome {
    Removed { product: Product, remaining: usize },
    NotFound,
}

impl DeleteOutcome {
    pub fn is_removed(&self) -> bool {
        matches!(self, DeleteOutcome::Removed { .. })
    }
}

/// Sole owner of the authoritative product list.
///
/// Every presentation layer reads the catalog through this type; products
/// enter via `add_product` and leave via `delete_product`, nothing else.
/// Persistence goes through the pluggable [`CatalogStore`] hook.
pub struct CatalogManager {
    products: Vec<Product>,
}

impl CatalogManager {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Bootstrap catalog with one item of each kind, for demos.
    pub fn with_sample_products() -> Self {
        let mut manager = Self::new();
        let samples = [
            Product::electronics("E001", "Laptop", 10, 999.99, "Dell", 12),
            Product::clothing("C001", "T-Shirt", 20, 19.99, "M", "Red"),
        ];
        for product in samples {
            // Sample identifiers are distinct, add cannot fail here
            let _ = manager.add_product(product);
        }
        manager
    }

    /// Add a product to the catalog. Identifiers are unique: a second
    /// product with the same ID is rejected rather than retained.
    pub fn add_product(&mut self, product: Product) -> Result<(), CatalogError> {
        if self.find(product.id()).is_some() {
            warn!("Rejected duplicate product ID: {}", product.id());
            return Err(CatalogError::DuplicateIdentifier {
                id: product.id().to_string(),
            });
        }

        info!("Adding product {} ('{}')", product.id(), product.name());
        self.products.push(product);
        Ok(())
    }

    /// Remove the first product whose identifier matches exactly.
    pub fn delete_product(&mut self, id: &str) -> DeleteOutcome {
        let position = self.products.iter().position(|p| p.id() == id);

        match position {
            Some(index) => {
                let product = self.products.remove(index);
                info!(
                    "Deleted product {} ('{}'), {} remaining",
                    product.id(),
                    product.name(),
                    self.products.len()
                );
                DeleteOutcome::Removed {
                    product,
                    remaining: self.products.len(),
                }
            }
            None => {
                warn!("Product not found with ID: {}", id);
                DeleteOutcome::NotFound
            }
        }
    }

    /// All products sorted by identifier, ascending. A projection for
    /// display; the stored order is left alone.
    pub fn list_products(&self) -> Vec<Product> {
        let mut products = self.products.clone();
        products.sort_by(|a, b| a.id().cmp(b.id()));

        debug!("Listing {} products", products.len());
        products
    }

    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Persist the catalog through the given store.
    pub fn save_products(&self, store: &dyn CatalogStore) -> Result<(), CatalogError> {
        info!("Saving {} products", self.products.len());
        store.save(&self.products)?;
        Ok(())
    }

    /// Replace the catalog contents with whatever the store holds.
    /// Returns the number of products loaded.
    pub fn load_products(&mut self, store: &dyn CatalogStore) -> Result<usize, CatalogError> {
        let products = store.load()?;
        let count = products.len();
        self.products = products;

        debug!("Catalog now holds {} products", count);
        Ok(count)
    }
}

impl Default for CatalogManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mock store for testing the persistence hook
    struct MockStore {
        saved: Mutex<Vec<Product>>,
    }

    impl MockStore {
        fn new() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
            }
        }
    }

    impl CatalogStore for MockStore {
        fn save(&self, products: &[Product]) -> Result<(), StoreError> {
            *self.saved.lock().unwrap() = products.to_vec();
            Ok(())
        }

        fn load(&self) -> Result<Vec<Product>, StoreError> {
            Ok(self.saved.lock().unwrap().clone())
        }
    }

    fn laptop() -> Product {
        Product::electronics("E001", "Laptop", 10, 999.99, "Dell", 12)
    }

    fn shirt() -> Product {
        Product::clothing("C001", "T-Shirt", 20, 19.99, "M", "Red")
    }

    #[test]
    fn test_add_and_find() {
        let mut manager = CatalogManager::new();
        manager.add_product(laptop()).unwrap();

        assert_eq!(manager.len(), 1);
        assert_eq!(manager.find("E001").unwrap().name(), "Laptop");
        assert!(manager.find("E999").is_none());
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut manager = CatalogManager::new();
        manager.add_product(laptop()).unwrap();

        let duplicate = Product::electronics("E001", "Other Laptop", 1, 1.0, "HP", 6);
        let result = manager.add_product(duplicate);

        assert!(matches!(
            result,
            Err(CatalogError::DuplicateIdentifier { ref id }) if id == "E001"
        ));
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.find("E001").unwrap().name(), "Laptop");
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut manager = CatalogManager::new();
        manager.add_product(laptop()).unwrap();
        manager.add_product(shirt()).unwrap();

        let outcome = manager.delete_product("E001");
        match outcome {
            DeleteOutcome::Removed { product, remaining } => {
                assert_eq!(product.id(), "E001");
                assert_eq!(remaining, 1);
            }
            DeleteOutcome::NotFound => panic!("expected removal"),
        }
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_delete_unknown_id_leaves_catalog_unchanged() {
        let mut manager = CatalogManager::new();
        manager.add_product(shirt()).unwrap();

        let outcome = manager.delete_product("E001");
        assert!(!outcome.is_removed());
        assert_eq!(manager.len(), 1);
        assert!(manager.find("C001").is_some());
    }

    #[test]
    fn test_list_is_sorted_by_id() {
        let mut manager = CatalogManager::new();
        manager.add_product(laptop()).unwrap();
        manager.add_product(shirt()).unwrap();

        let ids: Vec<String> = manager
            .list_products()
            .iter()
            .map(|p| p.id().to_string())
            .collect();
        assert_eq!(ids, vec!["C001", "E001"]);
    }

    #[test]
    fn test_list_does_not_mutate_stored_order() {
        let mut manager = CatalogManager::new();
        manager.add_product(laptop()).unwrap();
        manager.add_product(shirt()).unwrap();

        let _ = manager.list_products();

        // Deleting by position relies on insertion order being intact
        let outcome = manager.delete_product("E001");
        assert!(outcome.is_removed());
        assert_eq!(manager.find("C001").unwrap().id(), "C001");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let store = MockStore::new();

        let mut manager = CatalogManager::with_sample_products();
        manager.save_products(&store).unwrap();

        let mut restored = CatalogManager::new();
        let count = restored.load_products(&store).unwrap();

        assert_eq!(count, 2);
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.find("E001").unwrap().name(), "Laptop");
        assert_eq!(restored.find("C001").unwrap().name(), "T-Shirt");
    }

    #[test]
    fn test_sample_products_cover_both_kinds() {
        use crate::models::product::ProductKind;

        let manager = CatalogManager::with_sample_products();
        let kinds: Vec<ProductKind> = manager.list_products().iter().map(|p| p.kind()).collect();
        assert!(kinds.contains(&ProductKind::Electronics));
        assert!(kinds.contains(&ProductKind::Clothing));
    }
}
