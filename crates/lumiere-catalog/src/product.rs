//! Product records shown on collection pages.

use crate::ids::ProductId;
use crate::price::digits_value;
use serde::{Deserialize, Serialize};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Category key, compared exactly when filtering.
    pub category: String,
    /// Display price with currency symbol and thousands separators.
    pub price: String,
    pub description: String,
    pub image_url: String,
    /// Optional ribbon such as "New" or "Certified".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl Product {
    /// Create a product without a badge.
    pub fn new(
        id: &str,
        name: &str,
        category: &str,
        price: &str,
        description: &str,
        image_url: &str,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.to_string(),
            category: category.to_string(),
            price: price.to_string(),
            description: description.to_string(),
            image_url: image_url.to_string(),
            badge: None,
        }
    }

    /// Attach a badge.
    pub fn with_badge(mut self, badge: &str) -> Self {
        self.badge = Some(badge.to_string());
        self
    }

    /// Value used for price ordering.
    pub fn sort_price(&self) -> u64 {
        digits_value(&self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_price_from_display() {
        let product = Product::new("r1", "Halo Ring", "rings", "$4,800", "", "");
        assert_eq!(product.sort_price(), 4800);
        assert!(product.badge.is_none());
    }

    #[test]
    fn test_badge_serialization() {
        let product = Product::new("r1", "Halo Ring", "rings", "$4,800", "", "").with_badge("New");
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["badge"], "New");
        assert_eq!(json["id"], "r1");

        let plain = Product::new("r2", "Band", "rings", "$900", "", "");
        let json = serde_json::to_value(&plain).unwrap();
        assert!(json.get("badge").is_none());
    }
}
