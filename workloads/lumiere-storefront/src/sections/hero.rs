//! Hero carousel section.

use lumiere_sdk::lumiere_carousel::motion::{frame, Phase, SpringTransition};
use lumiere_sdk::lumiere_carousel::{Direction, Slide};
use lumiere_sdk::lumiere_core::html_escape;
use serde::Serialize;

use crate::pages::HomeView;

/// State handed to the client script as JSON.
#[derive(Debug, Serialize)]
struct CarouselBootstrap<'a> {
    active_index: usize,
    direction: Direction,
    slide_count: usize,
    autoplay_ms: u64,
    tick_href: String,
    /// Base URL for swipe reports; the script appends `offset,velocity`.
    swipe_href: String,
    enter_from: Option<&'a str>,
}

/// Render the carousel for `view`.
///
/// The active slide is centered. When this request moved the carousel, the
/// outgoing slide is rendered too and both carry their target frames in
/// `data-to`, which the client script applies on the next animation frame.
pub fn render_hero(view: &HomeView, autoplay_ms: u64, slide_offset: f64) -> String {
    let state = view.engine.state();
    let spring = SpringTransition::default();
    let transition_css = spring.to_css();

    let mut slides = String::new();
    if let Some(outgoing) = view.outgoing.and_then(|i| view.deck.get(i)) {
        let from = frame(Phase::Center, state.direction, slide_offset);
        let to = frame(Phase::Exit, state.direction, slide_offset);
        slides.push_str(&render_slide(outgoing, "outgoing", &from.to_css(), &to.to_css(), &transition_css, &spring));
    }
    if let Some(active) = view.deck.get(state.active_index) {
        let center = frame(Phase::Center, state.direction, slide_offset).to_css();
        let from = if view.outgoing.is_some() {
            frame(Phase::Enter, state.direction, slide_offset).to_css()
        } else {
            center.clone()
        };
        slides.push_str(&render_slide(active, "active", &from, &center, &transition_css, &spring));
    }

    let indicators: String = (0..view.deck.len())
        .map(|i| {
            format!(
                r#"<a class="indicator{}" href="{}" aria-label="Slide {}"></a>"#,
                if i == state.active_index { " active" } else { "" },
                html_escape(&view.jump_href(i)),
                i + 1
            )
        })
        .collect();

    let bootstrap = CarouselBootstrap {
        active_index: state.active_index,
        direction: state.direction,
        slide_count: view.engine.slide_count(),
        autoplay_ms,
        tick_href: view.tick_href(),
        swipe_href: format!("{}&swipe=", view.state_href()),
        enter_from: view.outgoing.map(|_| state.direction.as_str()),
    };
    let bootstrap_json = serde_json::to_string(&bootstrap)
        .unwrap_or_default()
        .replace("</", "<\\/");

    format!(
        r#"<section class="hero" data-section="hero" data-active="{}">
    <div class="hero-track">{}
    </div>
    <a class="hero-arrow prev" href="{}" aria-label="Previous slide">&#8249;</a>
    <a class="hero-arrow next" href="{}" aria-label="Next slide">&#8250;</a>
    <div class="hero-indicators">{}</div>
    <script type="application/json" id="carousel-state">{}</script>
</section>"#,
        state.active_index,
        slides,
        html_escape(&view.previous_href()),
        html_escape(&view.next_href()),
        indicators,
        bootstrap_json
    )
}

fn render_slide(
    slide: &Slide,
    role: &str,
    from_css: &str,
    to_css: &str,
    transition_css: &str,
    spring: &SpringTransition,
) -> String {
    format!(
        r#"
        <div class="hero-slide {}" data-slide-id="{}" style="{} transition: {};" data-to="{}">
            <div class="hero-image" style="background-image: url('{}'); animation-duration: {}s; --zoom-from: {};"></div>
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <span class="hero-subtitle">{}</span>
                <h1 class="hero-title">{}</h1>
                <p class="hero-description">{}</p>
                <a href="{}" class="hero-cta">{}</a>
            </div>
        </div>"#,
        role,
        slide.id,
        from_css,
        transition_css,
        html_escape(to_css),
        html_escape(&slide.image_url),
        spring.zoom_duration,
        spring.zoom_from,
        html_escape(&slide.subtitle),
        html_escape(&slide.title),
        html_escape(&slide.description),
        html_escape(&slide.cta_href),
        html_escape(&slide.cta_label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumiere_sdk::lumiere_core::{CarouselSettings, Method, RequestContext};

    fn view(path: &str) -> HomeView {
        let ctx = RequestContext::new(Method::Get, path);
        HomeView::from_request(&ctx, &CarouselSettings::default()).unwrap()
    }

    #[test]
    fn test_initial_render_is_centered() {
        let html = render_hero(&view("/"), 6000, 1000.0);
        assert!(html.contains("Timeless Elegance"));
        assert!(!html.contains("outgoing"));
        assert!(html.contains("transform: translateX(0px); opacity: 1; z-index: 1;"));
        assert_eq!(html.matches("class=\"indicator").count(), 3);
        assert!(html.contains(r#"class="indicator active" href="/?slide=0&amp;dir=forward&amp;to=0""#));
    }

    #[test]
    fn test_forward_move_renders_both_slides() {
        let html = render_hero(&view("/?slide=0&nav=next"), 6000, 1000.0);
        assert!(html.contains(r#"hero-slide outgoing" data-slide-id="1""#));
        assert!(html.contains(r#"hero-slide active" data-slide-id="2""#));
        // Incoming starts off to the right, outgoing heads left.
        assert!(html.contains("transform: translateX(1000px); opacity: 0;"));
        assert!(html.contains("data-to=\"transform: translateX(-1000px); opacity: 0; z-index: 0;\""));
    }

    #[test]
    fn test_bootstrap_json() {
        let html = render_hero(&view("/?slide=2&dir=backward"), 4500, 1000.0);
        let start = html.find(r#"id="carousel-state">"#).unwrap() + r#"id="carousel-state">"#.len();
        let end = html[start..].find("</script>").unwrap() + start;
        let json: serde_json::Value = serde_json::from_str(&html[start..end]).unwrap();
        assert_eq!(json["active_index"], 2);
        assert_eq!(json["direction"], "backward");
        assert_eq!(json["autoplay_ms"], 4500);
        assert_eq!(json["tick_href"], "/?slide=2&dir=backward&nav=tick");
        assert_eq!(json["swipe_href"], "/?slide=2&dir=backward&swipe=");
    }
}
