//! Theme error types.

use thiserror::Error;

/// Errors that can occur when building or using a font preference.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// The preference was used outside of a provider scope.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A font catalog needs at least one preset.
    #[error("Font catalog is empty")]
    EmptyCatalog,

    /// Two presets share an id.
    #[error("Duplicate font preset id: {0}")]
    DuplicatePreset(String),

    /// Reading or writing the preference store failed.
    #[error("Preference store error: {0}")]
    Store(String),
}
