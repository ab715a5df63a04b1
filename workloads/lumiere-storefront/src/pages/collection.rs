//! Collection page: catalog selection plus the category/sort controls.

use lumiere_sdk::lumiere_catalog::prelude::*;
use lumiere_sdk::lumiere_core::RequestContext;

use crate::data::CollectionCopy;

pub struct CollectionView {
    pub catalog: &'static Catalog,
    pub query: CollectionQuery,
    /// Category control values, `"all"` first.
    pub categories: Vec<String>,
    pub copy: CollectionCopy,
}

impl CollectionView {
    pub fn from_request(ctx: &RequestContext) -> Self {
        let catalog = Catalog::for_route(ctx.param("kind").unwrap_or_default());
        Self {
            catalog,
            query: CollectionQuery::from_query_string(&ctx.raw_query),
            categories: category_options(catalog.products()),
            copy: CollectionCopy::for_kind(catalog.kind()),
        }
    }

    pub fn results(&self) -> CollectionResults<'static> {
        filter_sort(self.catalog.products(), &self.query)
    }

    pub fn path(&self) -> String {
        format!("/collections/{}", self.catalog.kind().as_str())
    }

    /// URL of the current page, used as the font selector's return target.
    pub fn href(&self) -> String {
        self.href_for(&self.query)
    }

    /// Link selecting `category`, keeping the sort order.
    pub fn category_href(&self, category: &str) -> String {
        self.href_for(&self.query.clone().with_category(CategoryFilter::from_value(category)))
    }

    fn href_for(&self, query: &CollectionQuery) -> String {
        let qs = query.to_query_string();
        if qs.is_empty() {
            self.path()
        } else {
            format!("{}?{}", self.path(), qs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumiere_sdk::lumiere_core::{Method, RouteParams};

    fn view(kind: &str, query: &str) -> CollectionView {
        let mut params = RouteParams::new();
        params.insert("kind".to_string(), kind.to_string());
        let ctx = RequestContext::new(Method::Get, format!("/collections/{}?{}", kind, query))
            .with_params(params);
        CollectionView::from_request(&ctx)
    }

    #[test]
    fn test_gems_route() {
        let v = view("gems", "");
        assert_eq!(v.catalog.kind(), CollectionKind::Gems);
        assert_eq!(v.copy.title, "Premium Gemstones");
        assert_eq!(v.categories[0], "all");
        assert_eq!(v.results().len(), v.catalog.len());
    }

    #[test]
    fn test_unknown_kind_is_jewelry() {
        let v = view("watches", "");
        assert_eq!(v.catalog.kind(), CollectionKind::Jewelry);
        assert_eq!(v.path(), "/collections/jewelry");
        assert_eq!(v.copy.title, "Luxury Jewelry");
    }

    #[test]
    fn test_query_applied() {
        let v = view("jewelry", "category=rings&sort=price-high");
        let results = v.results();
        assert!(results.iter().all(|p| p.category == "rings"));
        let prices: Vec<u64> = results.iter().map(Product::sort_price).collect();
        assert!(prices.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_category_href_keeps_sort() {
        let v = view("jewelry", "category=rings&sort=price-low");
        assert_eq!(
            v.category_href("earrings"),
            "/collections/jewelry?category=earrings&sort=price-low"
        );
        assert_eq!(v.category_href("all"), "/collections/jewelry?sort=price-low");
        assert_eq!(v.href(), "/collections/jewelry?category=rings&sort=price-low");
    }
}
