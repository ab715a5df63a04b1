//! Static page copy.

use lumiere_sdk::lumiere_catalog::CollectionKind;

pub const BRAND: &str = "Lumière";
pub const TAGLINE: &str = "Ceylon gemstones and fine jewelry";

/// Hero block at the top of a collection page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionCopy {
    pub title: &'static str,
    pub description: &'static str,
    /// Decorative glyph shown above the title.
    pub icon: &'static str,
}

impl CollectionCopy {
    pub fn for_kind(kind: CollectionKind) -> Self {
        match kind {
            CollectionKind::Gems => Self {
                title: "Premium Gemstones",
                description: "Discover our curated selection of rare and precious gemstones from around the world",
                icon: "◆",
            },
            CollectionKind::Jewelry => Self {
                title: "Luxury Jewelry",
                description: "Handcrafted jewelry pieces that celebrate life's most precious moments",
                icon: "✦",
            },
        }
    }
}

/// Call-to-action block under the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtaCopy {
    pub heading: &'static str,
    pub body: &'static str,
    pub button_label: &'static str,
    pub button_href: &'static str,
}

pub const EXPERT_CTA: CtaCopy = CtaCopy {
    heading: "Can't Find What You're Looking For?",
    body: "Our experts can help you create a custom piece or find exactly what you need",
    button_label: "Contact Our Experts",
    button_href: "mailto:concierge@lumiere.example",
};

pub const EMPTY_COLLECTION: &str = "No products found in this category.";
