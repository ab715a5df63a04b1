//! Site header.

use lumiere_sdk::lumiere_core::html_escape;

use crate::data::BRAND;

/// Header with brand, navigation and the font selector markup.
pub fn render_header(collections_href: &str, font_selector: &str) -> String {
    format!(
        r#"<header class="site-header" data-section="header">
    <a href="/" class="logo">{}</a>
    <nav class="header-nav">
        <a href="/collections/gems">Gems</a>
        <a href="/collections/jewelry">Jewelry</a>
        <a href="{}">Collections</a>
    </nav>
    {}
</header>"#,
        html_escape(BRAND),
        html_escape(collections_href),
        font_selector
    )
}
