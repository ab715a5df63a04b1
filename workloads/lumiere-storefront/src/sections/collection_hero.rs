//! Collection page hero.

use lumiere_sdk::lumiere_core::html_escape;

use crate::data::CollectionCopy;

pub fn render_collection_hero(copy: &CollectionCopy) -> String {
    format!(
        r#"<section class="collection-hero" data-section="collection-hero">
    <div class="collection-hero-inner">
        <span class="collection-icon" aria-hidden="true">{}</span>
        <h1 class="collection-title">{}</h1>
        <div class="collection-rule"></div>
        <p class="collection-description">{}</p>
    </div>
</section>"#,
        copy.icon,
        html_escape(copy.title),
        html_escape(copy.description)
    )
}
