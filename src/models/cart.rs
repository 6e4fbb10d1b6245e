use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::product::Product;

/// A shopping session's cart: an ordered sequence of product slots.
///
/// The same product added twice occupies two slots; each slot counts its
/// unit price once toward the total. The cart lives and dies with the
/// session and is never persisted.
#[derive(Debug, Clone)]
pub struct ShoppingCart {
    session_id: Uuid,
    started_at: DateTime<Utc>,
    items: Vec<Product>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
            items: Vec::new(),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Append a product slot at the end of the cart. No duplicate check.
    pub fn add(&mut self, product: Product) {
        self.items.push(product);
    }

    /// Remove the first slot equal to the given product. Silent no-op when
    /// the product is not in the cart.
    pub fn remove(&mut self, product: &Product) {
        if let Some(position) = self.items.iter().position(|item| item == product) {
            self.items.remove(position);
        }
    }

    /// Sum of unit prices across all slots. 0.0 for an empty cart.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.price()).sum()
    }

    /// Read view of the slots, in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ShoppingCart {
    fn default() -> Self {
        Self::new()
    }
}
