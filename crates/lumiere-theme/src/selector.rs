//! Font selector dropdown state.

use serde::Serialize;

use crate::preference::{FontChange, FontPreference};
use crate::store::PreferenceStore;
use crate::style::StyleSink;
use crate::ThemeError;

/// Heading shown above the preset list.
pub const SELECTOR_HEADING: &str = "SELECT FONT FAMILY";

/// One row of the open selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorEntry<'a> {
    pub id: &'a str,
    pub display_name: &'a str,
    pub summary: String,
    pub active: bool,
}

/// Open/closed state of the selector. Starts closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FontSelector {
    open: bool,
}

impl FontSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selector rendered in the given state.
    pub fn with_open(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close without selecting, as on an outside click.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Pick a preset and close the dropdown.
    pub fn select<S, D>(
        &mut self,
        id: &str,
        preference: &mut FontPreference<'_, S, D>,
    ) -> Result<FontChange, ThemeError>
    where
        S: PreferenceStore,
        D: StyleSink,
    {
        self.open = false;
        preference.set_font(id)
    }

    /// Every preset in catalog order, with the active one marked.
    pub fn entries<'a, S, D>(&self, preference: &'a FontPreference<'_, S, D>) -> Vec<SelectorEntry<'a>>
    where
        S: PreferenceStore,
        D: StyleSink,
    {
        let active_id = preference.current().id.as_str();
        preference
            .catalog()
            .iter()
            .map(|preset| SelectorEntry {
                id: &preset.id,
                display_name: &preset.display_name,
                summary: preset.family_summary(),
                active: preset.id == active_id,
            })
            .collect()
    }
}
