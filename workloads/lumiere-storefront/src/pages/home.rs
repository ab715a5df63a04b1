//! Home page: hero carousel state carried in the URL.
//!
//! The page is stateless between requests. The query string carries the
//! rendered state (`slide`, `dir`) plus at most one input (`swipe`, `to` or
//! `nav`), which is applied through the carousel engine before rendering.

use lumiere_sdk::lumiere_carousel::{
    parse_swipe, CarouselEngine, CarouselError, CarouselState, Direction, SlideDeck,
    SwipeConfig, Transition,
};
use lumiere_sdk::lumiere_core::{CarouselSettings, RequestContext};

pub struct HomeView {
    pub deck: SlideDeck,
    pub engine: CarouselEngine,
    /// Slide shown before this request's input, when the input moved it.
    pub outgoing: Option<usize>,
    pub fonts_open: bool,
}

impl HomeView {
    pub fn from_request(
        ctx: &RequestContext,
        settings: &CarouselSettings,
    ) -> Result<Self, CarouselError> {
        let deck = SlideDeck::hero();
        let resumed = CarouselState {
            active_index: ctx
                .query_param("slide")
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            direction: ctx
                .query_param("dir")
                .map(Direction::from_value)
                .unwrap_or_default(),
        };

        let mut engine = CarouselEngine::new(deck.len(), SwipeConfig::new(settings.swipe_threshold))?
            .resume(resumed);

        let before = engine.active_index();
        let outgoing = match requested_transition(ctx) {
            Some(transition) if engine.apply(transition) => Some(before),
            _ => None,
        };

        Ok(Self {
            deck,
            engine,
            outgoing,
            fonts_open: ctx.query_param("fonts") == Some("open"),
        })
    }

    /// URL of the current state, without any pending input.
    pub fn state_href(&self) -> String {
        format!(
            "/?slide={}&dir={}",
            self.engine.active_index(),
            self.engine.direction().as_str()
        )
    }

    fn input_href(&self, input: &str) -> String {
        format!("{}&{}", self.state_href(), input)
    }

    pub fn next_href(&self) -> String {
        self.input_href("nav=next")
    }

    pub fn previous_href(&self) -> String {
        self.input_href("nav=prev")
    }

    pub fn tick_href(&self) -> String {
        self.input_href("nav=tick")
    }

    pub fn jump_href(&self, index: usize) -> String {
        self.input_href(&format!("to={}", index))
    }

    /// Toggle link for the font selector.
    pub fn fonts_href(&self) -> String {
        if self.fonts_open {
            self.state_href()
        } else {
            self.input_href("fonts=open")
        }
    }
}

/// The single input carried by a request. A swipe wins over a jump, which
/// wins over `nav`.
pub fn requested_transition(ctx: &RequestContext) -> Option<Transition> {
    if let Some((offset_x, velocity_x)) = ctx.query_param("swipe").and_then(parse_swipe) {
        return Some(Transition::Swipe {
            offset_x,
            velocity_x,
        });
    }
    if let Some(index) = ctx.query_param("to").and_then(|v| v.parse().ok()) {
        return Some(Transition::JumpTo(index));
    }
    match ctx.query_param("nav")? {
        "next" => Some(Transition::Next),
        "prev" => Some(Transition::Previous),
        "tick" => Some(Transition::Tick),
        _ => None,
    }
}
