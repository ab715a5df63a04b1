//! Font selector dropdown.

use lumiere_sdk::lumiere_core::{html_escape, url_encode};
use lumiere_sdk::lumiere_theme::prelude::{SelectorEntry, SELECTOR_HEADING};

/// Render the selector button and, when open, the preset list.
///
/// `toggle_href` opens or closes the list; each option posts its id to
/// `/font` with `return_to` as the page to come back to.
pub fn render_font_selector(
    entries: &[SelectorEntry<'_>],
    open: bool,
    toggle_href: &str,
    return_to: &str,
) -> String {
    let mut html = format!(
        r#"<div class="font-selector{}" data-section="font-selector">
    <a class="font-selector-toggle" href="{}" aria-expanded="{}"><span class="font-icon">Aa</span><span class="font-label">Font</span><span class="chevron"></span></a>"#,
        if open { " open" } else { "" },
        html_escape(toggle_href),
        open
    );

    if open {
        html.push_str(&format!(
            r#"
    <div class="font-menu" role="menu">
        <div class="font-menu-heading">{}</div>
        <div class="font-menu-list">"#,
            SELECTOR_HEADING
        ));
        for entry in entries {
            html.push_str(&render_entry(entry, return_to));
        }
        html.push_str("\n        </div>\n    </div>");
    }

    html.push_str("\n</div>");
    html
}

fn render_entry(entry: &SelectorEntry<'_>, return_to: &str) -> String {
    let href = format!("/font?id={}&return={}", url_encode(entry.id), url_encode(return_to));
    format!(
        r#"
            <a class="font-option{}" role="menuitem" href="{}"><span class="font-option-name">{}</span><span class="font-option-families">{}</span></a>"#,
        if entry.active { " active" } else { "" },
        html_escape(&href),
        html_escape(entry.display_name),
        html_escape(&entry.summary)
    )
}
