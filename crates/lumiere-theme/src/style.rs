//! Document style side channel.
//!
//! The font preference never touches markup directly. It asks a
//! [`StyleSink`] to swap one stylesheet reference and set two CSS custom
//! properties; [`DocumentStyle`] records the result for the page head.

use lumiere_core::html_escape;

/// Element id of the injected font stylesheet.
pub const FONT_LINK_ID: &str = "dynamic-font-import";

/// Custom property holding the body family.
pub const BODY_FONT_VAR: &str = "--font-body";

/// Custom property holding the heading family.
pub const HEADING_FONT_VAR: &str = "--font-heading";

/// Receiver of style changes.
pub trait StyleSink {
    /// Remove the stylesheet reference with this id, if any.
    fn remove_stylesheet(&mut self, id: &str);
    /// Add a stylesheet reference.
    fn append_stylesheet(&mut self, id: &str, href: &str);
    /// Set a custom property on the document root.
    fn set_variable(&mut self, name: &str, value: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct StyleLink {
    id: String,
    href: String,
}

/// Head state of one rendered document.
///
/// Holds at most one stylesheet reference per id; appending under an
/// existing id replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentStyle {
    links: Vec<StyleLink>,
    variables: Vec<(String, String)>,
}

impl DocumentStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stylesheet(&self, id: &str) -> Option<&str> {
        self.links
            .iter()
            .find(|l| l.id == id)
            .map(|l| l.href.as_str())
    }

    pub fn stylesheet_count(&self) -> usize {
        self.links.len()
    }

    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// `<link>` elements for the page head.
    pub fn head_html(&self) -> String {
        self.links
            .iter()
            .map(|l| {
                format!(
                    r#"<link id="{}" rel="stylesheet" href="{}">"#,
                    html_escape(&l.id),
                    html_escape(&l.href)
                )
            })
            .collect()
    }

    /// `:root` block declaring the custom properties, or empty.
    pub fn root_css(&self) -> String {
        if self.variables.is_empty() {
            return String::new();
        }
        let declarations: Vec<String> = self
            .variables
            .iter()
            .map(|(name, value)| format!("{}: {};", name, css_value(value)))
            .collect();
        format!(":root {{ {} }}", declarations.join(" "))
    }
}

impl StyleSink for DocumentStyle {
    fn remove_stylesheet(&mut self, id: &str) {
        self.links.retain(|l| l.id != id);
    }

    fn append_stylesheet(&mut self, id: &str, href: &str) {
        self.remove_stylesheet(id);
        self.links.push(StyleLink {
            id: id.to_string(),
            href: href.to_string(),
        });
    }

    fn set_variable(&mut self, name: &str, value: &str) {
        match self.variables.iter().position(|(n, _)| n == name) {
            Some(i) => self.variables[i].1 = value.to_string(),
            None => self.variables.push((name.to_string(), value.to_string())),
        }
    }
}

// Values end up inside a <style> element.
fn css_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '{' | '}' | ';'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_replaces_same_id() {
        let mut style = DocumentStyle::new();
        style.append_stylesheet(FONT_LINK_ID, "https://a.test/a.css");
        style.append_stylesheet(FONT_LINK_ID, "https://a.test/b.css");
        assert_eq!(style.stylesheet_count(), 1);
        assert_eq!(style.stylesheet(FONT_LINK_ID), Some("https://a.test/b.css"));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut style = DocumentStyle::new();
        style.remove_stylesheet(FONT_LINK_ID);
        assert_eq!(style.stylesheet_count(), 0);
        assert_eq!(style.head_html(), "");
        assert_eq!(style.root_css(), "");
    }

    #[test]
    fn test_head_html_escapes() {
        let mut style = DocumentStyle::new();
        style.append_stylesheet(FONT_LINK_ID, "https://f.test/css?a=1&b=2");
        assert_eq!(
            style.head_html(),
            r#"<link id="dynamic-font-import" rel="stylesheet" href="https://f.test/css?a=1&amp;b=2">"#
        );
    }

    #[test]
    fn test_root_css() {
        let mut style = DocumentStyle::new();
        style.set_variable(BODY_FONT_VAR, "Inter");
        style.set_variable(HEADING_FONT_VAR, "Playfair Display");
        style.set_variable(BODY_FONT_VAR, "Lato");
        assert_eq!(
            style.root_css(),
            ":root { --font-body: Lato; --font-heading: Playfair Display; }"
        );
        assert_eq!(style.variable(HEADING_FONT_VAR), Some("Playfair Display"));
    }

    #[test]
    fn test_root_css_strips_breakout() {
        let mut style = DocumentStyle::new();
        style.set_variable(BODY_FONT_VAR, "x;}</style><script>");
        assert_eq!(style.root_css(), ":root { --font-body: x/stylescript; }");
    }
}
