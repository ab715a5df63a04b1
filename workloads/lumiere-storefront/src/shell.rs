//! Storefront page shell and styles.

use lumiere_sdk::lumiere_streaming::{HeadContent, Shell};
use lumiere_sdk::lumiere_theme::DocumentStyle;

use crate::data::{BRAND, TAGLINE};
use crate::scripts::FONT_SELECTOR_SCRIPT;

/// Shell for one page. `style` carries the font stylesheet link and the
/// `:root` font properties; `scripts` are appended before `</body>`.
pub fn create_shell(title: &str, style: &DocumentStyle, scripts: &str) -> Shell {
    let head = HeadContent::new(format!("{} | {}", title, BRAND))
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta("description", TAGLINE)
        .with_raw(style.head_html())
        .with_style(&style.root_css())
        .with_style(STOREFRONT_STYLES);

    Shell::new(head)
        .with_body_start("<body>\n<main>\n")
        .with_body_end(format!(
            r#"</main>
<footer class="site-footer">
    <p class="footer-brand">{}</p>
    <p class="footer-tagline">{}</p>
</footer>
{}
{}
</body>
</html>"#,
            BRAND, TAGLINE, FONT_SELECTOR_SCRIPT, scripts
        ))
}

const STOREFRONT_STYLES: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: var(--font-body), system-ui, sans-serif;
    background: #000;
    color: #fff;
    line-height: 1.6;
}

h1, h2, h3, .logo {
    font-family: var(--font-heading), Georgia, serif;
    font-weight: 500;
    letter-spacing: -0.01em;
}

a { color: inherit; text-decoration: none; }

/* Header */
.site-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 40;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 2rem;
    padding: 1.25rem 2rem;
    background: linear-gradient(to bottom, rgba(0, 0, 0, 0.85), transparent);
}

.logo { font-size: 1.75rem; color: #5eead4; }

.header-nav { display: flex; gap: 2rem; margin-left: auto; }
.header-nav a { color: rgba(255, 255, 255, 0.8); letter-spacing: 0.08em; text-transform: uppercase; font-size: 0.8rem; }
.header-nav a:hover { color: #5eead4; }

/* Font selector */
.font-selector { position: relative; }

.font-selector-toggle {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 0.75rem;
    background: rgba(0, 0, 0, 0.5);
    border: 1px solid rgba(20, 184, 166, 0.3);
    border-radius: 0.5rem;
    font-size: 0.875rem;
}

.font-selector-toggle:hover { border-color: rgba(45, 212, 191, 0.6); }
.font-icon { color: #2dd4bf; font-weight: 600; }

.chevron {
    width: 0.5rem;
    height: 0.5rem;
    border-right: 2px solid currentColor;
    border-bottom: 2px solid currentColor;
    transform: rotate(45deg);
    transition: transform 0.2s;
}

.font-selector.open .chevron { transform: rotate(-135deg); }

.font-menu {
    position: absolute;
    right: 0;
    margin-top: 0.5rem;
    width: 16rem;
    padding: 0.5rem;
    background: rgba(0, 0, 0, 0.95);
    border: 1px solid rgba(20, 184, 166, 0.3);
    border-radius: 0.5rem;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
    animation: menu-in 0.2s ease-out;
}

.font-menu-heading {
    padding: 0.5rem 0.75rem;
    font-size: 0.75rem;
    font-weight: 600;
    color: #2dd4bf;
    border-bottom: 1px solid rgba(20, 184, 166, 0.2);
    margin-bottom: 0.25rem;
}

.font-menu-list { max-height: 24rem; overflow-y: auto; }
.font-menu-list::-webkit-scrollbar { width: 6px; }
.font-menu-list::-webkit-scrollbar-track { background: rgba(0, 0, 0, 0.3); border-radius: 3px; }
.font-menu-list::-webkit-scrollbar-thumb { background: rgba(20, 184, 166, 0.5); border-radius: 3px; }

.font-option {
    display: block;
    padding: 0.6rem 0.75rem;
    margin-bottom: 0.25rem;
    border: 1px solid transparent;
    border-radius: 0.375rem;
}

.font-option:hover { background: rgba(255, 255, 255, 0.1); }
.font-option.active { background: rgba(20, 184, 166, 0.2); border-color: rgba(45, 212, 191, 0.5); color: #5eead4; }
.font-option-name { display: block; font-size: 0.875rem; font-weight: 500; }
.font-option-families { display: block; font-size: 0.75rem; color: #9ca3af; }

@keyframes menu-in {
    from { opacity: 0; transform: translateY(-10px) scale(0.95); }
    to { opacity: 1; transform: none; }
}

/* Hero carousel */
.hero { position: relative; height: 100vh; overflow: hidden; background: #000; touch-action: pan-y; }
.hero-track { position: absolute; inset: 0; }
.hero-slide { position: absolute; inset: 0; }

.hero-image {
    position: absolute;
    inset: 0;
    background-size: cover;
    background-position: center;
    animation-name: hero-zoom;
    animation-timing-function: ease-out;
    animation-fill-mode: both;
}

@keyframes hero-zoom {
    from { transform: scale(var(--zoom-from)); }
    to { transform: scale(1); }
}

.hero-overlay { position: absolute; inset: 0; background: linear-gradient(to right, #000, rgba(0, 0, 0, 0.5), transparent); }

.hero-content {
    position: relative;
    z-index: 2;
    max-width: 42rem;
    height: 100%;
    display: flex;
    flex-direction: column;
    justify-content: center;
    padding: 0 4rem;
}

.hero-subtitle {
    align-self: flex-start;
    padding: 0.5rem 1rem;
    margin-bottom: 1rem;
    background: rgba(20, 184, 166, 0.2);
    border: 1px solid rgba(20, 184, 166, 0.5);
    border-radius: 9999px;
    color: #2dd4bf;
    font-size: 0.875rem;
    letter-spacing: 0.1em;
    text-transform: uppercase;
}

.hero-title { font-size: clamp(3rem, 7vw, 4.5rem); margin-bottom: 1.5rem; }
.hero-description { font-size: 1.25rem; color: #d1d5db; margin-bottom: 2rem; }

.hero-cta {
    align-self: flex-start;
    padding: 1rem 2rem;
    background: #14b8a6;
    border-radius: 2px;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    font-weight: 500;
    transition: box-shadow 0.3s;
}

.hero-cta:hover { box-shadow: 0 0 30px rgba(20, 184, 166, 0.5); }

.hero-arrow {
    position: absolute;
    top: 50%;
    z-index: 30;
    transform: translateY(-50%);
    width: 3rem;
    height: 3rem;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(0, 0, 0, 0.5);
    border: 1px solid rgba(20, 184, 166, 0.3);
    border-radius: 9999px;
    color: #2dd4bf;
    font-size: 1.75rem;
}

.hero-arrow:hover { background: rgba(20, 184, 166, 0.2); }
.hero-arrow.prev { left: 2rem; }
.hero-arrow.next { right: 2rem; }

.hero-indicators {
    position: absolute;
    bottom: 2rem;
    left: 50%;
    transform: translateX(-50%);
    z-index: 30;
    display: flex;
    gap: 0.75rem;
}

.indicator { display: block; width: 2rem; height: 4px; background: rgba(255, 255, 255, 0.3); transition: all 0.3s; }
.indicator:hover { background: rgba(255, 255, 255, 0.5); }
.indicator.active { width: 3rem; background: #14b8a6; }

/* Collection page */
.collection-hero {
    padding: 11rem 2rem 5rem;
    text-align: center;
    background: linear-gradient(to bottom, rgba(19, 78, 74, 0.2), transparent);
}

.collection-hero-inner { max-width: 56rem; margin: 0 auto; }
.collection-icon { display: block; font-size: 3.5rem; color: #2dd4bf; margin-bottom: 1.5rem; }
.collection-title { font-size: clamp(3rem, 7vw, 4.5rem); color: #ccfbf1; margin-bottom: 1.5rem; }
.collection-rule { width: 8rem; height: 4px; margin: 0 auto 2rem; background: linear-gradient(to right, transparent, #2dd4bf, transparent); }
.collection-description { font-size: 1.25rem; color: #99f6e4; }

.collection-filters {
    position: sticky;
    top: 5rem;
    z-index: 10;
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    gap: 1.5rem;
    padding: 1.5rem 2rem;
    background: rgba(0, 0, 0, 0.95);
    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
}

.filter-group { display: flex; align-items: center; gap: 1rem; flex: 1; }
.filter-label { color: rgba(255, 255, 255, 0.6); font-size: 0.875rem; font-weight: 500; letter-spacing: 0.08em; text-transform: uppercase; }
.category-buttons { display: flex; flex-wrap: wrap; gap: 0.5rem; }

.category-button {
    padding: 0.6rem 1.25rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 0.5rem;
    background: rgba(255, 255, 255, 0.05);
    color: rgba(255, 255, 255, 0.7);
    font-size: 0.875rem;
    font-weight: 500;
    transition: all 0.3s;
}

.category-button:hover { background: rgba(255, 255, 255, 0.1); color: #fff; }
.category-button.active { background: #14b8a6; border-color: #14b8a6; color: #000; box-shadow: 0 10px 15px rgba(20, 184, 166, 0.3); }

.filter-divider { width: 1px; height: 2.5rem; background: rgba(255, 255, 255, 0.1); }
.sort-form { display: flex; align-items: center; gap: 1rem; }

.sort-form select {
    min-width: 200px;
    padding: 0.6rem 1.5rem;
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 0.5rem;
    color: #fff;
    font: inherit;
    font-size: 0.875rem;
}

.sort-form option { background: #000; }
.result-count { color: rgba(255, 255, 255, 0.5); font-size: 0.875rem; }
.result-count .count { color: #2dd4bf; font-weight: 600; }

.product-grid-section { padding: 3rem 2rem; max-width: 80rem; margin: 0 auto; }

.product-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
    gap: 2rem;
}

.product-card {
    background: rgba(255, 255, 255, 0.03);
    border: 1px solid rgba(255, 255, 255, 0.08);
    border-radius: 0.75rem;
    overflow: hidden;
    animation: card-in 0.5s ease-out both;
    transition: border-color 0.3s, transform 0.3s;
}

.product-card:hover { border-color: rgba(20, 184, 166, 0.5); transform: translateY(-4px); }
.product-image { position: relative; aspect-ratio: 1; background: #0f172a; }
.product-image img { width: 100%; height: 100%; object-fit: cover; }

.product-badge {
    position: absolute;
    top: 0.75rem;
    left: 0.75rem;
    padding: 0.25rem 0.75rem;
    background: #14b8a6;
    color: #000;
    border-radius: 9999px;
    font-size: 0.75rem;
    font-weight: 600;
}

.product-info { padding: 1.25rem; }
.product-name { font-size: 1.25rem; margin-bottom: 0.5rem; }
.product-description { color: #9ca3af; font-size: 0.875rem; margin-bottom: 1rem; }
.product-price { color: #2dd4bf; font-size: 1.125rem; font-weight: 600; }

@keyframes card-in {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: none; }
}

.empty-state { text-align: center; padding: 5rem 0; color: #99f6e4; font-size: 1.125rem; }

/* Call to action */
.cta { padding: 5rem 2rem; }

.cta-panel {
    max-width: 80rem;
    margin: 0 auto;
    padding: 4rem;
    text-align: center;
    border-radius: 1.5rem;
    background: linear-gradient(to bottom right, #0d9488, #14b8a6);
}

.cta-heading { font-size: 2.25rem; margin-bottom: 1rem; }
.cta-body { color: #f0fdfa; font-size: 1.125rem; margin-bottom: 2rem; }

.cta-button {
    display: inline-block;
    padding: 1rem 2.5rem;
    background: #fff;
    color: #0d9488;
    border-radius: 9999px;
    font-weight: 500;
}

/* 404 */
.not-found { min-height: 70vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1.5rem; padding: 8rem 2rem 4rem; }
.not-found code { color: #5eead4; }

/* Footer */
.site-footer { padding: 3rem 2rem; text-align: center; border-top: 1px solid rgba(255, 255, 255, 0.1); color: rgba(255, 255, 255, 0.6); }
.footer-brand { font-family: var(--font-heading), Georgia, serif; font-size: 1.5rem; color: #5eead4; }

@media (max-width: 768px) {
    .header-nav { display: none; }
    .hero-content { padding: 0 1.5rem; }
    .hero-arrow { display: none; }
    .filter-divider { display: none; }
    .cta-panel { padding: 3rem 1.5rem; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use lumiere_sdk::lumiere_theme::StyleSink;

    #[test]
    fn test_shell_carries_font_style() {
        let mut style = DocumentStyle::new();
        style.append_stylesheet("dynamic-font-import", "https://fonts.test/lato.css");
        style.set_variable("--font-body", "Lato");

        let shell = create_shell("Home", &style, "<script>home()</script>");
        let opening = shell.render_opening();
        assert!(opening.contains("<title>Home | Lumière</title>"));
        assert!(opening.contains(r#"<link id="dynamic-font-import" rel="stylesheet" href="https://fonts.test/lato.css">"#));
        assert!(opening.contains(":root { --font-body: Lato; }"));
        assert!(opening.find("dynamic-font-import").unwrap() < opening.find("<style>").unwrap());

        let closing = shell.render_closing();
        assert!(closing.contains("<script>home()</script>"));
        assert!(closing.ends_with("</html>"));
    }
}
