//! Font theming for the Lumiere storefront.
//!
//! - **Catalog**: [`FontCatalog`], the fixed list of heading/body pairings
//! - **Preference**: [`FontPreference`], the single active preset, persisted
//!   through a [`PreferenceStore`] and applied through a [`StyleSink`]
//! - **Provider**: [`FontProvider`], the scope components read it from
//! - **Selector**: [`FontSelector`], dropdown state for switching presets
//!
//! # Example
//!
//! ```
//! use lumiere_theme::prelude::*;
//!
//! let mut pref = FontPreference::initialize(
//!     FontCatalog::standard(),
//!     MemoryStore::new(),
//!     DocumentStyle::new(),
//!     DEFAULT_PREFERENCE_KEY,
//! )
//! .unwrap();
//!
//! assert_eq!(pref.set_font("lato").unwrap(), FontChange::Applied);
//! assert_eq!(pref.style().variable(BODY_FONT_VAR), Some("Lato"));
//! ```

pub mod catalog;
pub mod error;
pub mod preference;
pub mod provider;
pub mod selector;
pub mod store;
pub mod style;

pub use catalog::{FontCatalog, FontPreset};
pub use error::ThemeError;
pub use preference::{FontChange, FontPreference};
pub use provider::FontProvider;
pub use selector::{FontSelector, SelectorEntry};
pub use store::{CookieStore, MemoryStore, PreferenceStore};
pub use style::{DocumentStyle, StyleSink};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::{FontCatalog, FontPreset};
    pub use crate::error::ThemeError;
    pub use crate::preference::{FontChange, FontPreference};
    pub use crate::provider::FontProvider;
    pub use crate::selector::{FontSelector, SelectorEntry, SELECTOR_HEADING};
    pub use crate::store::{
        CookieStore, MemoryStore, PreferenceStore, DEFAULT_COOKIE_MAX_AGE_SECS,
        DEFAULT_PREFERENCE_KEY,
    };
    pub use crate::style::{
        DocumentStyle, StyleSink, BODY_FONT_VAR, FONT_LINK_ID, HEADING_FONT_VAR,
    };
}
