//! Font presets.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::ThemeError;

/// A heading/body font pairing and the stylesheet that loads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontPreset {
    pub id: String,
    pub name: String,
    /// Label shown in the selector.
    pub display_name: String,
    pub body_font: String,
    pub heading_font: String,
    pub import_url: String,
}

impl FontPreset {
    pub fn new(
        id: &str,
        name: &str,
        display_name: &str,
        body_font: &str,
        heading_font: &str,
        import_url: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            display_name: display_name.to_string(),
            body_font: body_font.to_string(),
            heading_font: heading_font.to_string(),
            import_url: import_url.to_string(),
        }
    }

    /// Preset using one family for body and headings.
    pub fn single(id: &str, family: &str, import_url: &str) -> Self {
        Self::new(id, family, family, family, family, import_url)
    }

    /// `"Inter"` when both roles share a family, otherwise
    /// `"Heading: X • Body: Y"`.
    pub fn family_summary(&self) -> String {
        if self.body_font == self.heading_font {
            self.body_font.clone()
        } else {
            format!("Heading: {} • Body: {}", self.heading_font, self.body_font)
        }
    }
}

/// Ordered, non-empty preset list with unique ids. The first preset is
/// the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontCatalog {
    presets: Vec<FontPreset>,
}

impl FontCatalog {
    pub fn new(presets: Vec<FontPreset>) -> Result<Self, ThemeError> {
        if presets.is_empty() {
            return Err(ThemeError::EmptyCatalog);
        }
        let mut seen = HashSet::new();
        for preset in &presets {
            if !seen.insert(preset.id.as_str()) {
                return Err(ThemeError::DuplicatePreset(preset.id.clone()));
            }
        }
        Ok(Self { presets })
    }

    /// The storefront's fifteen presets.
    pub fn standard() -> &'static FontCatalog {
        static STANDARD: OnceLock<FontCatalog> = OnceLock::new();
        STANDARD.get_or_init(|| FontCatalog {
            presets: standard_presets(),
        })
    }

    pub fn find(&self, id: &str) -> Option<&FontPreset> {
        self.presets.iter().find(|p| p.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.presets.iter().position(|p| p.id == id)
    }

    pub fn first(&self) -> &FontPreset {
        &self.presets[0]
    }

    pub fn get(&self, index: usize) -> Option<&FontPreset> {
        self.presets.get(index)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Always false; a catalog cannot be built empty.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FontPreset> {
        self.presets.iter()
    }
}

const GOOGLE_FONTS: &str = "https://fonts.googleapis.com/css2?family=";

fn google(families: &str) -> String {
    format!("{}{}&display=swap", GOOGLE_FONTS, families)
}

fn standard_presets() -> Vec<FontPreset> {
    vec![
        FontPreset::new(
            "playfair-inter",
            "Playfair Display & Inter",
            "Playfair & Inter (Current)",
            "Inter",
            "Playfair Display",
            &google("Playfair+Display:wght@400;500;600;700;800&family=Inter:wght@300;400;500;600;700"),
        ),
        FontPreset::single("montserrat", "Montserrat", &google("Montserrat:wght@300;400;500;600;700;800")),
        FontPreset::single("roboto", "Roboto", &google("Roboto:wght@300;400;500;700;900")),
        FontPreset::single("lato", "Lato", &google("Lato:wght@300;400;700;900")),
        FontPreset::single("open-sans", "Open Sans", &google("Open+Sans:wght@300;400;600;700;800")),
        FontPreset::single("raleway", "Raleway", &google("Raleway:wght@300;400;500;600;700;800")),
        FontPreset::single("poppins", "Poppins", &google("Poppins:wght@300;400;500;600;700;800")),
        FontPreset::new(
            "cormorant-inter",
            "Cormorant Garamond & Inter",
            "Cormorant & Inter",
            "Inter",
            "Cormorant Garamond",
            &google("Cormorant+Garamond:wght@300;400;500;600;700&family=Inter:wght@300;400;500;600;700"),
        ),
        FontPreset::single("merriweather", "Merriweather", &google("Merriweather:wght@300;400;700;900")),
        FontPreset::single("nunito", "Nunito Sans", &google("Nunito+Sans:wght@300;400;600;700;800;900")),
        FontPreset::single("bodoni-moda", "Bodoni Moda", &google("Bodoni+Moda:wght@400;500;600;700;800;900")),
        FontPreset::single("cinzel", "Cinzel", &google("Cinzel:wght@400;500;600;700;800;900")),
        FontPreset::single("crimson-text", "Crimson Text", &google("Crimson+Text:wght@400;600;700")),
        FontPreset::single("libre-baskerville", "Libre Baskerville", &google("Libre+Baskerville:wght@400;700")),
        FontPreset::single("josefin-sans", "Josefin Sans", &google("Josefin+Sans:wght@300;400;500;600;700")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = FontCatalog::standard();
        assert_eq!(catalog.len(), 15);
        assert_eq!(catalog.first().id, "playfair-inter");
        assert_eq!(catalog.first().heading_font, "Playfair Display");
        // Rebuilding through the checked constructor succeeds.
        let presets: Vec<FontPreset> = catalog.iter().cloned().collect();
        assert!(FontCatalog::new(presets).is_ok());
    }

    #[test]
    fn test_import_urls() {
        let lato = FontCatalog::standard().find("lato").unwrap();
        assert_eq!(
            lato.import_url,
            "https://fonts.googleapis.com/css2?family=Lato:wght@300;400;700;900&display=swap"
        );
        assert!(FontCatalog::standard()
            .iter()
            .all(|p| p.import_url.ends_with("&display=swap")));
    }

    #[test]
    fn test_family_summary() {
        let catalog = FontCatalog::standard();
        assert_eq!(catalog.find("montserrat").unwrap().family_summary(), "Montserrat");
        assert_eq!(
            catalog.find("playfair-inter").unwrap().family_summary(),
            "Heading: Playfair Display • Body: Inter"
        );
    }

    #[test]
    fn test_empty_and_duplicate_rejected() {
        assert_eq!(FontCatalog::new(vec![]), Err(ThemeError::EmptyCatalog));
        let preset = FontPreset::single("lato", "Lato", "https://example.test/lato.css");
        assert_eq!(
            FontCatalog::new(vec![preset.clone(), preset]),
            Err(ThemeError::DuplicatePreset("lato".to_string()))
        );
    }

    #[test]
    fn test_lookup() {
        let catalog = FontCatalog::standard();
        assert_eq!(catalog.position("cinzel"), Some(11));
        assert!(catalog.find("comic-sans").is_none());
    }
}
