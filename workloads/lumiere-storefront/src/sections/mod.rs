//! Section renderers for storefront pages.

mod collection_filters;
mod collection_hero;
mod cta;
mod font_selector;
mod header;
mod hero;
mod not_found;
mod product_grid;

pub use collection_filters::*;
pub use collection_hero::*;
pub use cta::*;
pub use font_selector::*;
pub use header::*;
pub use hero::*;
pub use not_found::*;
pub use product_grid::*;
