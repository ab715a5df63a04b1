//! The active font preset and its side effects.

use tracing::{debug, warn};

use crate::catalog::{FontCatalog, FontPreset};
use crate::store::PreferenceStore;
use crate::style::{StyleSink, BODY_FONT_VAR, FONT_LINK_ID, HEADING_FONT_VAR};
use crate::ThemeError;

/// Outcome of [`FontPreference::set_font`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontChange {
    /// A different preset is now active and its effects were applied.
    Applied,
    /// The requested preset was already active.
    Unchanged,
    /// No preset has that id. Nothing changed.
    Unknown,
}

/// Owner of the active preset.
///
/// Every activation runs the same effects, in order: drop the previous
/// font stylesheet, link the new one, set the body and heading custom
/// properties, persist the preset id.
#[derive(Debug)]
pub struct FontPreference<'c, S, D>
where
    S: PreferenceStore,
    D: StyleSink,
{
    catalog: &'c FontCatalog,
    active: usize,
    store: S,
    style: D,
    key: String,
}

impl<'c, S, D> FontPreference<'c, S, D>
where
    S: PreferenceStore,
    D: StyleSink,
{
    /// Restore the persisted preset (or the first one) and apply it.
    ///
    /// A failed read falls back to the first preset. A failed write is
    /// returned.
    pub fn initialize(
        catalog: &'c FontCatalog,
        store: S,
        style: D,
        key: impl Into<String>,
    ) -> Result<Self, ThemeError> {
        let key = key.into();

        let active = match store.get(&key) {
            Ok(Some(id)) => catalog.position(&id).unwrap_or_else(|| {
                debug!(font = %id, "persisted font not in catalog, using default");
                0
            }),
            Ok(None) => 0,
            Err(e) => {
                warn!(error = %e, key = %key, "failed to read font preference, using default");
                0
            }
        };

        let mut preference = Self {
            catalog,
            active,
            store,
            style,
            key,
        };
        preference.apply_effects()?;
        Ok(preference)
    }

    pub fn current(&self) -> &FontPreset {
        // Index comes from the catalog, which is immutable and non-empty.
        self.catalog.get(self.active).unwrap_or_else(|| self.catalog.first())
    }

    /// Activate the preset with `id`.
    ///
    /// If persisting fails, the previous preset and its style are restored
    /// and the store error is returned.
    pub fn set_font(&mut self, id: &str) -> Result<FontChange, ThemeError> {
        let Some(index) = self.catalog.position(id) else {
            debug!(font = %id, "ignoring unknown font");
            return Ok(FontChange::Unknown);
        };
        if index == self.active {
            return Ok(FontChange::Unchanged);
        }

        let previous = self.active;
        self.active = index;
        if let Err(e) = self.apply_effects() {
            warn!(font = %id, error = %e, "failed to persist font, restoring previous");
            self.active = previous;
            self.apply_style();
            return Err(e);
        }
        debug!(font = %id, "font applied");
        Ok(FontChange::Applied)
    }

    pub fn catalog(&self) -> &'c FontCatalog {
        self.catalog
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn style(&self) -> &D {
        &self.style
    }

    /// Release the store and style sink.
    pub fn into_parts(self) -> (S, D) {
        (self.store, self.style)
    }

    fn apply_effects(&mut self) -> Result<(), ThemeError> {
        self.apply_style();
        let preset = self.current();
        let id = preset.id.clone();
        self.store.set(&self.key, &id)
    }

    fn apply_style(&mut self) {
        let catalog = self.catalog;
        let preset = catalog.get(self.active).unwrap_or_else(|| catalog.first());

        self.style.remove_stylesheet(FONT_LINK_ID);
        self.style.append_stylesheet(FONT_LINK_ID, &preset.import_url);
        self.style.set_variable(BODY_FONT_VAR, &preset.body_font);
        self.style.set_variable(HEADING_FONT_VAR, &preset.heading_font);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::store::{MemoryStore, DEFAULT_PREFERENCE_KEY};
    use crate::style::DocumentStyle;

    type Log = Rc<RefCell<Vec<String>>>;

    struct RecordingStyle(Log);

    impl StyleSink for RecordingStyle {
        fn remove_stylesheet(&mut self, id: &str) {
            self.0.borrow_mut().push(format!("remove {}", id));
        }
        fn append_stylesheet(&mut self, id: &str, href: &str) {
            self.0.borrow_mut().push(format!("append {} {}", id, href));
        }
        fn set_variable(&mut self, name: &str, value: &str) {
            self.0.borrow_mut().push(format!("var {} {}", name, value));
        }
    }

    struct RecordingStore(Log);

    impl PreferenceStore for RecordingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, ThemeError> {
            Ok(None)
        }
        fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
            self.0.borrow_mut().push(format!("persist {} {}", key, value));
            Ok(())
        }
    }

    #[derive(Debug)]
    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, ThemeError> {
            Err(ThemeError::Store("unavailable".to_string()))
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), ThemeError> {
            Err(ThemeError::Store("read-only".to_string()))
        }
    }

    /// Accepts a fixed number of writes, then fails.
    #[derive(Debug)]
    struct FlakyStore {
        inner: MemoryStore,
        writes_left: usize,
    }

    impl PreferenceStore for FlakyStore {
        fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
            self.inner.get(key)
        }
        fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
            if self.writes_left == 0 {
                return Err(ThemeError::Store("quota exceeded".to_string()));
            }
            self.writes_left -= 1;
            self.inner.set(key, value)
        }
    }

    fn catalog() -> &'static FontCatalog {
        FontCatalog::standard()
    }

    fn init(store: MemoryStore) -> FontPreference<'static, MemoryStore, DocumentStyle> {
        FontPreference::initialize(catalog(), store, DocumentStyle::new(), DEFAULT_PREFERENCE_KEY)
            .unwrap()
    }

    #[test]
    fn test_defaults_to_first_preset() {
        let pref = init(MemoryStore::new());
        assert_eq!(pref.current().id, "playfair-inter");
        assert_eq!(
            pref.store().get(DEFAULT_PREFERENCE_KEY).unwrap(),
            Some("playfair-inter".to_string())
        );
        assert_eq!(pref.style().variable(BODY_FONT_VAR), Some("Inter"));
        assert_eq!(pref.style().variable(HEADING_FONT_VAR), Some("Playfair Display"));
    }

    #[test]
    fn test_restores_persisted_preset() {
        let pref = init(MemoryStore::new().with_value(DEFAULT_PREFERENCE_KEY, "lato"));
        assert_eq!(pref.current().id, "lato");
        assert_eq!(
            pref.style().stylesheet(FONT_LINK_ID),
            Some(pref.current().import_url.as_str())
        );
    }

    #[test]
    fn test_unknown_persisted_id_falls_back() {
        let pref = init(MemoryStore::new().with_value(DEFAULT_PREFERENCE_KEY, "comic-sans"));
        assert_eq!(pref.current().id, "playfair-inter");
        // The fallback is persisted over the stale value.
        assert_eq!(
            pref.store().get(DEFAULT_PREFERENCE_KEY).unwrap(),
            Some("playfair-inter".to_string())
        );
    }

    #[test]
    fn test_set_font_applies_everything() {
        let mut pref = init(MemoryStore::new());
        assert_eq!(pref.set_font("montserrat").unwrap(), FontChange::Applied);
        assert_eq!(pref.current().id, "montserrat");
        assert_eq!(pref.style().variable(BODY_FONT_VAR), Some("Montserrat"));
        assert_eq!(pref.style().variable(HEADING_FONT_VAR), Some("Montserrat"));
        assert_eq!(pref.style().stylesheet_count(), 1);
        assert_eq!(
            pref.store().get(DEFAULT_PREFERENCE_KEY).unwrap(),
            Some("montserrat".to_string())
        );
    }

    #[test]
    fn test_unknown_id_changes_nothing() {
        let mut pref = init(MemoryStore::new().with_value(DEFAULT_PREFERENCE_KEY, "lato"));
        let style_before = pref.style().clone();
        let store_before = pref.store().clone();

        assert_eq!(pref.set_font("does-not-exist").unwrap(), FontChange::Unknown);
        assert_eq!(pref.current().id, "lato");
        assert_eq!(pref.style(), &style_before);
        assert_eq!(pref.store(), &store_before);
    }

    #[test]
    fn test_same_id_is_unchanged() {
        let mut pref = init(MemoryStore::new());
        assert_eq!(pref.set_font("playfair-inter").unwrap(), FontChange::Unchanged);
    }

    #[test]
    fn test_effects_run_in_order() {
        let log: Log = Rc::default();
        let mut pref = FontPreference::initialize(
            catalog(),
            RecordingStore(log.clone()),
            RecordingStyle(log.clone()),
            "font",
        )
        .unwrap();
        log.borrow_mut().clear();

        pref.set_font("cinzel").unwrap();
        let url = &catalog().find("cinzel").unwrap().import_url;
        assert_eq!(
            *log.borrow(),
            vec![
                "remove dynamic-font-import".to_string(),
                format!("append dynamic-font-import {}", url),
                "var --font-body Cinzel".to_string(),
                "var --font-heading Cinzel".to_string(),
                "persist font cinzel".to_string(),
            ]
        );
    }

    #[test]
    fn test_link_never_duplicated() {
        let mut pref = init(MemoryStore::new());
        for id in ["lato", "roboto", "lato", "cinzel"] {
            pref.set_font(id).unwrap();
            assert_eq!(pref.style().stylesheet_count(), 1);
        }
    }

    #[test]
    fn test_read_failure_falls_back_write_failure_surfaces() {
        let err = FontPreference::initialize(catalog(), BrokenStore, DocumentStyle::new(), "font")
            .unwrap_err();
        assert_eq!(err, ThemeError::Store("read-only".to_string()));
    }

    #[test]
    fn test_failed_write_restores_previous_font() {
        let store = FlakyStore {
            inner: MemoryStore::new(),
            writes_left: 1,
        };
        let mut pref =
            FontPreference::initialize(catalog(), store, DocumentStyle::new(), "font").unwrap();
        let style_before = pref.style().clone();

        let err = pref.set_font("cinzel").unwrap_err();
        assert_eq!(err, ThemeError::Store("quota exceeded".to_string()));
        assert_eq!(pref.current().id, "playfair-inter");
        assert_eq!(pref.style(), &style_before);
        assert_eq!(
            pref.store().inner.get("font").unwrap(),
            Some("playfair-inter".to_string())
        );
    }

    #[test]
    fn test_into_parts() {
        let pref = init(MemoryStore::new());
        let (store, style) = pref.into_parts();
        assert!(store.get(DEFAULT_PREFERENCE_KEY).unwrap().is_some());
        assert!(style.head_html().contains(FONT_LINK_ID));
    }
}
