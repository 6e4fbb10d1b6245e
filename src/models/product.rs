use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    Electronics,
    Clothing,
}

impl std::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductKind::Electronics => write!(f, "Electronics"),
            ProductKind::Clothing => write!(f, "Clothing"),
        }
    }
}

/// A catalog item. The variant set is closed: every product is either an
/// electronics item or a clothing item, with a handful of shared attributes
/// and a few variant-specific ones.
///
/// Fields are fixed at construction; the catalog replaces products wholesale
/// rather than mutating them in place. Identifier uniqueness is the catalog
/// manager's job, not the product's.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Product {
    Electronics {
        id: String,
        name: String,
        available_items: u32,
        price: f64,
        brand: String,
        warranty_months: u32,
    },
    Clothing {
        id: String,
        name: String,
        available_items: u32,
        price: f64,
        size: String,
        color: String,
    },
}

impl Product {
    pub fn electronics(
        id: impl Into<String>,
        name: impl Into<String>,
        available_items: u32,
        price: f64,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        Product::Electronics {
            id: id.into(),
            name: name.into(),
            available_items,
            price,
            brand: brand.into(),
            warranty_months,
        }
    }

    pub fn clothing(
        id: impl Into<String>,
        name: impl Into<String>,
        available_items: u32,
        price: f64,
        size: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Product::Clothing {
            id: id.into(),
            name: name.into(),
            available_items,
            price,
            size: size.into(),
            color: color.into(),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Product::Electronics { id, .. } | Product::Clothing { id, .. } => id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Product::Electronics { name, .. } | Product::Clothing { name, .. } => name,
        }
    }

    pub fn available_items(&self) -> u32 {
        match self {
            Product::Electronics {
                available_items, ..
            }
            | Product::Clothing {
                available_items, ..
            } => *available_items,
        }
    }

    pub fn price(&self) -> f64 {
        match self {
            Product::Electronics { price, .. } | Product::Clothing { price, .. } => *price,
        }
    }

    pub fn kind(&self) -> ProductKind {
        match self {
            Product::Electronics { .. } => ProductKind::Electronics,
            Product::Clothing { .. } => ProductKind::Clothing,
        }
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} (${:.2})",
            self.id(),
            self.name(),
            self.price()
        )
    }
}

lazy_static::lazy_static! {
    static ref PRODUCT_ID_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();
}

/// Variant-specific fields collected at the input boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum VariantDraft {
    Electronics { brand: String, warranty_months: u32 },
    Clothing { size: String, color: String },
}

// input dto
//
// Validation happens here, at the presentation boundary, and nowhere else:
// `Product` itself accepts whatever it is given.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ProductDraft {
    #[validate(length(min = 1, max = 32, message = "Product ID must be 1-32 characters"))]
    #[validate(regex(
        path = "PRODUCT_ID_REGEX",
        message = "Product ID can only contain letters, numbers, dashes, and underscores"
    ))]
    pub id: String,

    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    pub available_items: u32,

    #[validate(range(min = 0.0, message = "Price must be non-negative"))]
    pub price: f64,

    pub variant: VariantDraft,
}

// custom error
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),
}

impl ProductDraft {
    /// Validate the draft and build the concrete product.
    pub fn build(self) -> Result<Product, ProductError> {
        self.validate().map_err(ProductError::ValidationError)?;

        Ok(match self.variant {
            VariantDraft::Electronics {
                brand,
                warranty_months,
            } => Product::Electronics {
                id: self.id.trim().to_string(),
                name: self.name.trim().to_string(),
                available_items: self.available_items,
                price: self.price,
                brand,
                warranty_months,
            },
            VariantDraft::Clothing { size, color } => Product::Clothing {
                id: self.id.trim().to_string(),
                name: self.name.trim().to_string(),
                available_items: self.available_items,
                price: self.price,
                size,
                color,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Product {
        Product::electronics("E001", "Laptop", 10, 999.99, "Dell", 12)
    }

    #[test]
    fn test_common_accessors() {
        let product = laptop();
        assert_eq!(product.id(), "E001");
        assert_eq!(product.name(), "Laptop");
        assert_eq!(product.available_items(), 10);
        assert_eq!(product.price(), 999.99);
    }

    #[test]
    fn test_kind_tags() {
        let electronics = laptop();
        let clothing = Product::clothing("C001", "T-Shirt", 20, 19.99, "M", "Red");

        assert_eq!(electronics.kind(), ProductKind::Electronics);
        assert_eq!(clothing.kind(), ProductKind::Clothing);
        assert_eq!(electronics.kind().to_string(), "Electronics");
        assert_eq!(clothing.kind().to_string(), "Clothing");
    }

    #[test]
    fn test_valid_draft_builds_product() {
        let draft = ProductDraft {
            id: "E100".to_string(),
            name: "Headphones".to_string(),
            available_items: 5,
            price: 49.99,
            variant: VariantDraft::Electronics {
                brand: "Sony".to_string(),
                warranty_months: 24,
            },
        };

        let product = draft.build().unwrap();
        assert_eq!(product.id(), "E100");
        assert_eq!(product.kind(), ProductKind::Electronics);
    }

    #[test]
    fn test_draft_rejects_empty_id() {
        let draft = ProductDraft {
            id: "".to_string(),
            name: "Headphones".to_string(),
            available_items: 5,
            price: 49.99,
            variant: VariantDraft::Clothing {
                size: "L".to_string(),
                color: "Blue".to_string(),
            },
        };

        assert!(draft.build().is_err());
    }

    #[test]
    fn test_draft_rejects_negative_price() {
        let draft = ProductDraft {
            id: "C100".to_string(),
            name: "Socks".to_string(),
            available_items: 50,
            price: -1.0,
            variant: VariantDraft::Clothing {
                size: "S".to_string(),
                color: "White".to_string(),
            },
        };

        assert!(draft.build().is_err());
    }

    #[test]
    fn test_draft_rejects_id_with_spaces() {
        let draft = ProductDraft {
            id: "E 001".to_string(),
            name: "Laptop".to_string(),
            available_items: 1,
            price: 999.99,
            variant: VariantDraft::Electronics {
                brand: "Dell".to_string(),
                warranty_months: 12,
            },
        };

        assert!(draft.build().is_err());
    }

    #[test]
    fn test_serde_round_trip_keeps_variant() {
        let product = laptop();
        let json = serde_json::to_string(&product).unwrap();
        let restored: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(product, restored);
    }
}
