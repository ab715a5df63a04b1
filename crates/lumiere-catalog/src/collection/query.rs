//! Collection query: the category and sort controls of a collection page.

use lumiere_core::{url_decode, url_encode};
use serde::{Deserialize, Serialize};

use crate::collection::CategoryFilter;

/// Ordering of collection results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Featured,
    /// Cheapest first.
    PriceAscending,
    /// Most expensive first.
    PriceDescending,
}

impl SortOrder {
    /// All orders, in the order the sort control lists them.
    pub const ALL: [SortOrder; 3] = [
        SortOrder::Featured,
        SortOrder::PriceAscending,
        SortOrder::PriceDescending,
    ];

    /// Parse a control value; unknown values fall back to `Featured`.
    pub fn from_value(value: &str) -> Self {
        match value {
            "price-low" => Self::PriceAscending,
            "price-high" => Self::PriceDescending,
            _ => Self::Featured,
        }
    }

    pub fn as_value(&self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceAscending => "price-low",
            Self::PriceDescending => "price-high",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceAscending => "Price: Low to High",
            Self::PriceDescending => "Price: High to Low",
        }
    }
}

/// Category + order selected on a collection page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollectionQuery {
    pub category: CategoryFilter,
    pub order: SortOrder,
}

impl CollectionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Set the sort order.
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Parse `category=..&sort=..`. Missing or unknown values use defaults.
    pub fn from_query_string(qs: &str) -> Self {
        let mut query = Self::new();

        for pair in qs.split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "category" => query.category = CategoryFilter::from_value(&url_decode(value)),
                "sort" => query.order = SortOrder::from_value(value),
                _ => {}
            }
        }

        query
    }

    /// Query string that reproduces this query, omitting defaults.
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();
        if let CategoryFilter::Only(category) = &self.category {
            parts.push(format!("category={}", url_encode(category)));
        }
        if self.order != SortOrder::Featured {
            parts.push(format!("sort={}", self.order.as_value()));
        }
        parts.join("&")
    }
}
