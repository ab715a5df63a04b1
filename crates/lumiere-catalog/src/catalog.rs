//! The two static product catalogs and route-based selection.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::price::parse_price;
use crate::product::Product;
use crate::CatalogError;

/// Which catalog a collection page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    Gems,
    Jewelry,
}

impl CollectionKind {
    /// Map a route parameter to a catalog. Only `"gems"` selects gems.
    pub fn from_route(param: &str) -> Self {
        if param == "gems" {
            Self::Gems
        } else {
            Self::Jewelry
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gems => "gems",
            Self::Jewelry => "jewelry",
        }
    }
}

/// An ordered, immutable product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    kind: CollectionKind,
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, checking id uniqueness and price format.
    pub fn new(kind: CollectionKind, products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateProduct(product.id.to_string()));
            }
            parse_price(&product.price)?;
        }
        Ok(Self { kind, products })
    }

    /// The catalog for a kind. Built once per process.
    pub fn for_kind(kind: CollectionKind) -> &'static Catalog {
        static GEMS: OnceLock<Catalog> = OnceLock::new();
        static JEWELRY: OnceLock<Catalog> = OnceLock::new();

        match kind {
            CollectionKind::Gems => GEMS.get_or_init(|| Catalog {
                kind,
                products: gems_products(),
            }),
            CollectionKind::Jewelry => JEWELRY.get_or_init(|| Catalog {
                kind,
                products: jewelry_products(),
            }),
        }
    }

    /// The catalog selected by a collection route parameter.
    pub fn for_route(param: &str) -> &'static Catalog {
        Self::for_kind(CollectionKind::from_route(param))
    }

    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn gems_products() -> Vec<Product> {
    vec![
        Product::new(
            "gem-royal-blue-sapphire",
            "Royal Blue Ceylon Sapphire",
            "sapphire",
            "$12,500",
            "A 4.2 carat cornflower-blue sapphire from the Ratnapura gem fields.",
            "/images/gems/royal-blue-sapphire.jpg",
        )
        .with_badge("Certified"),
        Product::new(
            "gem-padparadscha",
            "Padparadscha Sapphire",
            "sapphire",
            "$18,900",
            "The lotus-coloured rarity of Ceylon, 2.8 carats, unheated.",
            "/images/gems/padparadscha.jpg",
        )
        .with_badge("Rare"),
        Product::new(
            "gem-pigeon-blood-ruby",
            "Pigeon Blood Ruby",
            "ruby",
            "$24,000",
            "Vivid red ruby with exceptional fire, 3.1 carats.",
            "/images/gems/pigeon-blood-ruby.jpg",
        ),
        Product::new(
            "gem-star-ruby",
            "Star Ruby Cabochon",
            "ruby",
            "$6,400",
            "Six-rayed asterism on a deep crimson cabochon.",
            "/images/gems/star-ruby.jpg",
        ),
        Product::new(
            "gem-colombian-emerald",
            "Colombian Emerald",
            "emerald",
            "$15,750",
            "Muzo-green emerald, 3.6 carats, minor oil.",
            "/images/gems/colombian-emerald.jpg",
        ),
        Product::new(
            "gem-yellow-sapphire",
            "Golden Yellow Sapphire",
            "sapphire",
            "$3,200",
            "Sunlit yellow sapphire, 5 carats, eye clean.",
            "/images/gems/yellow-sapphire.jpg",
        ),
        Product::new(
            "gem-cats-eye",
            "Chrysoberyl Cat's Eye",
            "chrysoberyl",
            "$8,800",
            "Honey-toned chrysoberyl with a sharp, centred eye.",
            "/images/gems/cats-eye.jpg",
        ),
        Product::new(
            "gem-alexandrite",
            "Alexandrite",
            "chrysoberyl",
            "$21,000",
            "Colour-change alexandrite shifting from teal to raspberry.",
            "/images/gems/alexandrite.jpg",
        )
        .with_badge("Rare"),
        Product::new(
            "gem-blue-spinel",
            "Cobalt Blue Spinel",
            "spinel",
            "$9,500",
            "Electric cobalt spinel from the Elahera region.",
            "/images/gems/blue-spinel.jpg",
        ),
    ]
}

fn jewelry_products() -> Vec<Product> {
    vec![
        Product::new(
            "jw-sapphire-halo-ring",
            "Sapphire Halo Ring",
            "rings",
            "$4,800",
            "Ceylon sapphire framed by a halo of round brilliants in 18k white gold.",
            "/images/jewelry/sapphire-halo-ring.jpg",
        )
        .with_badge("Bestseller"),
        Product::new(
            "jw-solitaire-ring",
            "Classic Diamond Solitaire",
            "rings",
            "$7,200",
            "A 1.2 carat solitaire on a knife-edge platinum band.",
            "/images/jewelry/solitaire-ring.jpg",
        ),
        Product::new(
            "jw-sapphire-pendant",
            "Ceylon Sapphire Pendant",
            "necklaces",
            "$3,950",
            "Pear-cut sapphire suspended from a fine 18k chain.",
            "/images/jewelry/sapphire-pendant.jpg",
        ),
        Product::new(
            "jw-riviere-necklace",
            "Diamond Riviere Necklace",
            "necklaces",
            "$28,500",
            "Graduated diamonds set in a continuous line.",
            "/images/jewelry/riviere-necklace.jpg",
        )
        .with_badge("Signature"),
        Product::new(
            "jw-ruby-studs",
            "Ruby Stud Earrings",
            "earrings",
            "$2,400",
            "Matched oval rubies in four-claw yellow gold settings.",
            "/images/jewelry/ruby-studs.jpg",
        ),
        Product::new(
            "jw-emerald-drops",
            "Emerald Drop Earrings",
            "earrings",
            "$6,100",
            "Emerald-cut drops beneath diamond-set tops.",
            "/images/jewelry/emerald-drops.jpg",
        ),
        Product::new(
            "jw-tennis-bracelet",
            "Diamond Tennis Bracelet",
            "bracelets",
            "$9,800",
            "Five carats of brilliants in a flexible platinum line.",
            "/images/jewelry/tennis-bracelet.jpg",
        ),
        Product::new(
            "jw-sapphire-bangle",
            "Sapphire Eternity Bangle",
            "bracelets",
            "$4,800",
            "Channel-set sapphires around a polished gold bangle.",
            "/images/jewelry/sapphire-bangle.jpg",
        ),
    ]
}
