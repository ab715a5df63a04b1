//! Scope that makes a font preference available to page components.

use crate::preference::FontPreference;
use crate::store::PreferenceStore;
use crate::style::StyleSink;
use crate::ThemeError;

const OUTSIDE_PROVIDER: &str = "font preference must be used within a FontProvider";

/// Holds the font preference for the components rendered inside it.
///
/// Components reach the preference through [`use_font`](Self::use_font);
/// an empty provider reports `ThemeError::InvalidState` instead of handing
/// out a default.
#[derive(Debug)]
pub struct FontProvider<'c, S, D>
where
    S: PreferenceStore,
    D: StyleSink,
{
    preference: Option<FontPreference<'c, S, D>>,
}

impl<'c, S, D> Default for FontProvider<'c, S, D>
where
    S: PreferenceStore,
    D: StyleSink,
{
    fn default() -> Self {
        Self { preference: None }
    }
}

impl<'c, S, D> FontProvider<'c, S, D>
where
    S: PreferenceStore,
    D: StyleSink,
{
    /// Provider with no preference installed.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(preference: FontPreference<'c, S, D>) -> Self {
        Self {
            preference: Some(preference),
        }
    }

    pub fn use_font(&self) -> Result<&FontPreference<'c, S, D>, ThemeError> {
        self.preference
            .as_ref()
            .ok_or_else(|| ThemeError::InvalidState(OUTSIDE_PROVIDER.to_string()))
    }

    pub fn use_font_mut(&mut self) -> Result<&mut FontPreference<'c, S, D>, ThemeError> {
        self.preference
            .as_mut()
            .ok_or_else(|| ThemeError::InvalidState(OUTSIDE_PROVIDER.to_string()))
    }

    /// End the scope, returning the preference if one was installed.
    pub fn into_inner(self) -> Option<FontPreference<'c, S, D>> {
        self.preference
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FontCatalog;
    use crate::store::MemoryStore;
    use crate::style::DocumentStyle;

    #[test]
    fn test_empty_provider_is_invalid_state() {
        let mut provider: FontProvider<'_, MemoryStore, DocumentStyle> = FontProvider::empty();
        let err = provider.use_font().unwrap_err();
        assert_eq!(
            err,
            ThemeError::InvalidState(
                "font preference must be used within a FontProvider".to_string()
            )
        );
        assert!(provider.use_font_mut().is_err());
    }

    #[test]
    fn test_provider_shares_preference() {
        let pref = FontPreference::initialize(
            FontCatalog::standard(),
            MemoryStore::new(),
            DocumentStyle::new(),
            "font",
        )
        .unwrap();
        let mut provider = FontProvider::new(pref);

        provider.use_font_mut().unwrap().set_font("poppins").unwrap();
        assert_eq!(provider.use_font().unwrap().current().id, "poppins");
        assert!(provider.into_inner().is_some());
    }
}
