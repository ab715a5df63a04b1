//! Category buttons, sort control and item count.

use lumiere_sdk::lumiere_catalog::prelude::*;
use lumiere_sdk::lumiere_core::html_escape;

use crate::pages::CollectionView;

/// Button label for a category value: first letter upper-cased.
pub fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render the filter bar. `count_label` is the results' item count line.
pub fn render_collection_filters(view: &CollectionView, count_label: &str) -> String {
    let selected = view.query.category.as_value();

    let buttons: String = view
        .categories
        .iter()
        .map(|category| {
            format!(
                r#"<a class="category-button{}" href="{}">{}</a>"#,
                if category == selected { " active" } else { "" },
                html_escape(&view.category_href(category)),
                html_escape(&category_label(category))
            )
        })
        .collect();

    let options: String = SortOrder::ALL
        .iter()
        .map(|order| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                order.as_value(),
                if *order == view.query.order { " selected" } else { "" },
                order.display_name()
            )
        })
        .collect();

    let hidden_category = match &view.query.category {
        CategoryFilter::All => String::new(),
        CategoryFilter::Only(category) => format!(
            r#"<input type="hidden" name="category" value="{}">"#,
            html_escape(category)
        ),
    };

    let (count, noun) = count_label.split_once(' ').unwrap_or((count_label, ""));

    format!(
        r#"<section class="collection-filters" data-section="filters">
    <div class="filter-group">
        <span class="filter-label">Filter</span>
        <div class="category-buttons">{}</div>
    </div>
    <div class="filter-divider"></div>
    <form class="sort-form" method="GET" action="{}">
        <span class="filter-label">Sort</span>
        {}
        <select name="sort" onchange="this.form.submit()">{}</select>
        <noscript><button type="submit">Apply</button></noscript>
    </form>
    <div class="filter-divider"></div>
    <p class="result-count"><span class="count">{}</span> {}</p>
</section>"#,
        buttons,
        html_escape(&view.path()),
        hidden_category,
        options,
        html_escape(count),
        html_escape(noun)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumiere_sdk::lumiere_core::{Method, RequestContext, RouteParams};

    fn view(query: &str) -> CollectionView {
        let mut params = RouteParams::new();
        params.insert("kind".to_string(), "jewelry".to_string());
        let ctx = RequestContext::new(Method::Get, format!("/collections/jewelry?{}", query))
            .with_params(params);
        CollectionView::from_request(&ctx)
    }

    #[test]
    fn test_category_label() {
        assert_eq!(category_label("rings"), "Rings");
        assert_eq!(category_label("all"), "All");
        assert_eq!(category_label(""), "");
        assert_eq!(category_label("émeraude"), "Émeraude");
    }

    #[test]
    fn test_active_category_and_sort() {
        let html = render_collection_filters(&view("category=rings&sort=price-high"), "2 items");
        assert!(html.contains(r#"class="category-button active" href="/collections/jewelry?category=rings&amp;sort=price-high">Rings</a>"#));
        assert!(html.contains(r#"<option value="price-high" selected>Price: High to Low</option>"#));
        assert!(html.contains(r#"<input type="hidden" name="category" value="rings">"#));
        assert!(html.contains(r#"<span class="count">2</span> items"#));
    }

    #[test]
    fn test_all_selected_by_default() {
        let html = render_collection_filters(&view(""), "8 items");
        assert!(html.contains(r#"class="category-button active" href="/collections/jewelry">All</a>"#));
        assert!(html.contains(r#"<option value="featured" selected>Featured</option>"#));
        assert!(!html.contains("type=\"hidden\""));
    }
}
