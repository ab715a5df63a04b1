//! Collection page filtering and ordering.
//!
//! The pipeline always runs in the same order: category filter, then a
//! stable price sort. The source catalog is never reordered.

mod filter;
mod query;
mod results;

pub use filter::{category_options, CategoryFilter, ALL_CATEGORIES};
pub use query::{CollectionQuery, SortOrder};
pub use results::{filter_sort, CollectionResults};
