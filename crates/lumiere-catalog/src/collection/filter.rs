//! Category filter.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Sentinel category value meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

/// Category restriction applied before sorting.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Keep products whose category equals this value exactly.
    Only(String),
}

impl CategoryFilter {
    /// Read a UI value; the `"all"` sentinel and empty input mean no filter.
    pub fn from_value(value: &str) -> Self {
        if value.is_empty() || value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// Value as used in URLs and category controls.
    pub fn as_value(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == *category,
        }
    }
}

/// Category control values: `"all"` first, then each distinct category in
/// the order it first appears.
pub fn category_options(products: &[Product]) -> Vec<String> {
    let mut options = vec![ALL_CATEGORIES.to_string()];
    for product in products {
        if !options.iter().skip(1).any(|c| *c == product.category) {
            options.push(product.category.clone());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, category: &str) -> Product {
        Product::new(id, id, category, "$100", "", "")
    }

    #[test]
    fn test_from_value() {
        assert_eq!(CategoryFilter::from_value("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_value(""), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_value("rings"),
            CategoryFilter::Only("rings".to_string())
        );
        assert_eq!(CategoryFilter::from_value("rings").as_value(), "rings");
        assert_eq!(CategoryFilter::All.as_value(), "all");
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let filter = CategoryFilter::Only("rings".to_string());
        assert!(filter.matches(&product("a", "rings")));
        assert!(!filter.matches(&product("b", "Rings")));
    }

    #[test]
    fn test_category_options_first_seen_order() {
        let products = vec![
            product("a", "rings"),
            product("b", "necklaces"),
            product("c", "rings"),
            product("d", "earrings"),
        ];
        assert_eq!(
            category_options(&products),
            vec!["all", "rings", "necklaces", "earrings"]
        );
    }

    #[test]
    fn test_category_options_empty_catalog() {
        assert_eq!(category_options(&[]), vec!["all"]);
    }

    #[test]
    fn test_category_literally_named_all_keeps_its_entry() {
        let products = vec![product("a", "all")];
        assert_eq!(category_options(&products), vec!["all", "all"]);
    }
}
