//! Product grid and empty state.

use lumiere_sdk::lumiere_catalog::prelude::*;
use lumiere_sdk::lumiere_core::html_escape;

use crate::data::EMPTY_COLLECTION;

pub fn render_product_grid(results: &CollectionResults<'_>) -> String {
    if results.is_empty() {
        return format!(
            r#"<section class="product-grid-section" data-section="products">
    <div class="empty-state"><p>{}</p></div>
</section>"#,
            EMPTY_COLLECTION
        );
    }

    let cards: String = results
        .iter()
        .enumerate()
        .map(|(index, product)| render_card(product, index))
        .collect();

    format!(
        r#"<section class="product-grid-section" data-section="products">
    <div class="product-grid">{}
    </div>
</section>"#,
        cards
    )
}

fn render_card(product: &Product, index: usize) -> String {
    let badge = product
        .badge
        .as_ref()
        .map(|b| format!(r#"<span class="product-badge">{}</span>"#, html_escape(b)))
        .unwrap_or_default();

    format!(
        r#"
        <article class="product-card" data-product-id="{}" style="animation-delay: {}ms">
            <div class="product-image">
                <img src="{}" alt="{}" loading="lazy">
                {}
            </div>
            <div class="product-info">
                <h3 class="product-name">{}</h3>
                <p class="product-description">{}</p>
                <p class="product-price">{}</p>
            </div>
        </article>"#,
        html_escape(product.id.as_str()),
        index * 50,
        html_escape(&product.image_url),
        html_escape(&product.name),
        badge,
        html_escape(&product.name),
        html_escape(&product.description),
        html_escape(&product.price)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state() {
        let results = filter_sort(&[], &CollectionQuery::default());
        let html = render_product_grid(&results);
        assert!(html.contains("No products found in this category."));
        assert!(!html.contains("product-card"));
    }

    #[test]
    fn test_cards_in_result_order() {
        let products = vec![
            Product::new("a", "Halo Ring", "rings", "$3,000", "Halo", "/a.jpg").with_badge("New"),
            Product::new("b", "Stud <Earrings>", "earrings", "$300", "Studs", "/b.jpg"),
        ];
        let query = CollectionQuery::from_query_string("sort=price-low");
        let html = render_product_grid(&filter_sort(&products, &query));

        assert_eq!(html.matches("<article").count(), 2);
        assert!(html.find(r#"data-product-id="b""#).unwrap() < html.find(r#"data-product-id="a""#).unwrap());
        assert!(html.contains("Stud &lt;Earrings&gt;"));
        assert!(html.contains(r#"<span class="product-badge">New</span>"#));
        assert!(html.contains("$3,000"));
    }
}
