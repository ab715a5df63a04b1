//! Call-to-action block.

use lumiere_sdk::lumiere_core::html_escape;

use crate::data::CtaCopy;

pub fn render_cta(copy: &CtaCopy) -> String {
    format!(
        r#"<section class="cta" data-section="cta">
    <div class="cta-panel">
        <h2 class="cta-heading">{}</h2>
        <p class="cta-body">{}</p>
        <a href="{}" class="cta-button">{}</a>
    </div>
</section>"#,
        html_escape(copy.heading),
        html_escape(copy.body),
        html_escape(copy.button_href),
        html_escape(copy.button_label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::EXPERT_CTA;

    #[test]
    fn test_expert_cta() {
        let html = render_cta(&EXPERT_CTA);
        assert!(html.contains("Can&#39;t Find What You&#39;re Looking For?"));
        assert!(html.contains(">Contact Our Experts</a>"));
    }
}
