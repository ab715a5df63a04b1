//! 404 page body.

use lumiere_sdk::lumiere_core::html_escape;

pub fn render_not_found(path: &str) -> String {
    format!(
        r#"<section class="not-found" data-section="not-found">
    <h1>Page not found</h1>
    <p>Nothing lives at <code>{}</code>.</p>
    <a href="/" class="cta-button">Return home</a>
</section>"#,
        html_escape(path)
    )
}
