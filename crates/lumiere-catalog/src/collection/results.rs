//! Filter + sort pipeline output.

use crate::collection::{CollectionQuery, SortOrder};
use crate::product::Product;

/// Products shown on a collection page, borrowed from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionResults<'a> {
    items: Vec<&'a Product>,
}

impl<'a> CollectionResults<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.items.iter().copied()
    }

    pub fn items(&self) -> &[&'a Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Count line shown above the grid: `"1 item"`, `"6 items"`.
    pub fn count_label(&self) -> String {
        match self.items.len() {
            1 => "1 item".to_string(),
            n => format!("{} items", n),
        }
    }
}

impl<'a> IntoIterator for CollectionResults<'a> {
    type Item = &'a Product;
    type IntoIter = std::vec::IntoIter<&'a Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Filter `products` by category, then order them by price.
///
/// The input slice is left untouched. Sorting is stable, so equal prices
/// (and the `Featured` order) keep catalog order.
pub fn filter_sort<'a>(products: &'a [Product], query: &CollectionQuery) -> CollectionResults<'a> {
    let mut items: Vec<&Product> = products
        .iter()
        .filter(|p| query.category.matches(p))
        .collect();

    match query.order {
        SortOrder::Featured => {}
        SortOrder::PriceAscending => items.sort_by_key(|p| p.sort_price()),
        SortOrder::PriceDescending => {
            items.sort_by(|a, b| b.sort_price().cmp(&a.sort_price()))
        }
    }

    CollectionResults { items }
}
