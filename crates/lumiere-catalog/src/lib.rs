//! Product catalogs and the collection filter/sort pipeline.
//!
//! - **Catalog**: the gems and jewelry product lists, selected by route
//! - **Price**: display-string price extraction used for ordering
//! - **Collection**: category filter + price ordering over a product list
//!
//! # Example
//!
//! ```
//! use lumiere_catalog::prelude::*;
//!
//! let catalog = Catalog::for_route("gems");
//! let query = CollectionQuery::from_query_string("category=sapphire&sort=price-low");
//! let results = filter_sort(catalog.products(), &query);
//!
//! assert!(results.iter().all(|p| p.category == "sapphire"));
//! ```

pub mod catalog;
pub mod collection;
pub mod error;
pub mod ids;
pub mod price;
pub mod product;

pub use catalog::{Catalog, CollectionKind};
pub use error::CatalogError;
pub use ids::ProductId;
pub use product::Product;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::{Catalog, CollectionKind};
    pub use crate::collection::{
        category_options, filter_sort, CategoryFilter, CollectionQuery, CollectionResults,
        SortOrder, ALL_CATEGORIES,
    };
    pub use crate::error::CatalogError;
    pub use crate::ids::ProductId;
    pub use crate::price::{digits_value, format_price, parse_price};
    pub use crate::product::Product;
}
