//! Slide content and the ordered deck.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::CarouselError;

/// One hero slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image_url: String,
    /// Label of the slide's call-to-action button.
    pub cta_label: String,
    /// Where the call-to-action leads.
    pub cta_href: String,
}

impl Slide {
    pub fn new(id: u32, title: &str, subtitle: &str, description: &str, image_url: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            description: description.to_string(),
            image_url: image_url.to_string(),
            cta_label: "Explore Collection".to_string(),
            cta_href: "/collections/jewelry".to_string(),
        }
    }

    /// Set the call-to-action label and target.
    pub fn with_cta(mut self, label: &str, href: &str) -> Self {
        self.cta_label = label.to_string();
        self.cta_href = href.to_string();
        self
    }
}

/// Ordered, non-empty list of slides. Order defines the cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDeck {
    slides: Vec<Slide>,
}

impl SlideDeck {
    /// Build a deck, rejecting an empty list and duplicate ids.
    pub fn new(slides: Vec<Slide>) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::EmptyDeck);
        }
        let mut seen = HashSet::new();
        for slide in &slides {
            if !seen.insert(slide.id) {
                return Err(CarouselError::DuplicateSlide(slide.id));
            }
        }
        Ok(Self { slides })
    }

    /// The storefront's home page deck.
    pub fn hero() -> Self {
        Self {
            slides: vec![
                Slide::new(
                    1,
                    "Timeless Elegance",
                    "Nature's Luxury, Crafted for Royalty",
                    "Discover Ceylon's finest gemstones transformed into exquisite masterpieces",
                    "https://res.cloudinary.com/dyp247eoh/image/upload/v1769610924/royal1_gxftoo.jpg",
                )
                .with_cta("Explore Collection", "/collections/gems"),
                Slide::new(
                    2,
                    "Radiant Brilliance",
                    "Handcrafted Diamond Excellence",
                    "Each piece tells a story of heritage and unmatched craftsmanship",
                    "https://images.unsplash.com/photo-1763256614634-7feb3ff79ff3?fit=max&fm=jpg&q=80&w=1080",
                )
                .with_cta("Shop Rings", "/collections/jewelry?category=rings"),
                Slide::new(
                    3,
                    "Ceylon Sapphires",
                    "The Island of Gems",
                    "Sri Lanka's most celebrated treasures, handpicked for perfection",
                    "https://images.unsplash.com/photo-1767921804162-9c55a278768d?fit=max&fm=jpg&q=80&w=1080",
                )
                .with_cta("View Necklaces", "/collections/jewelry?category=necklaces"),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }
}
