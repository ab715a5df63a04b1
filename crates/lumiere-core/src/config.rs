//! Storefront settings and route configuration.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level storefront configuration, usually read from `storefront.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Hero carousel tuning.
    #[serde(default)]
    pub carousel: CarouselSettings,

    /// Font theming.
    #[serde(default)]
    pub theme: ThemeSettings,

    /// Collection page behaviour.
    #[serde(default)]
    pub collection: CollectionSettings,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl StorefrontConfig {
    /// Parse a configuration from TOML source.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse storefront TOML config")
    }

    /// Load a configuration file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize storefront config")
    }
}

/// Hero carousel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Automatic advance period in milliseconds.
    pub autoplay_interval_ms: u64,
    /// Swipe power a drag must exceed to change slides.
    pub swipe_threshold: f64,
    /// Horizontal offset (px) slides enter from and exit to.
    pub slide_offset: f64,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 6000,
            swipe_threshold: 10_000.0,
            slide_offset: 1000.0,
        }
    }
}

impl CarouselSettings {
    /// Autoplay period as a `Duration`.
    pub fn autoplay_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.autoplay_interval_ms)
    }
}

/// Font theming settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    /// Key the active preset id is persisted under.
    pub preference_key: String,
    /// Lifetime of the preference cookie.
    pub cookie_max_age_secs: u64,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            preference_key: "lumiere.selected-font".to_string(),
            cookie_max_age_secs: 31_536_000,
        }
    }
}

/// Collection page settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionSettings {
    /// Collection the site header links to.
    pub default_kind: String,
}

impl Default for CollectionSettings {
    fn default() -> Self {
        Self {
            default_kind: "jewelry".to_string(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Minimum level: trace, debug, info, warn or error.
    pub level: String,
    /// `json` or `human`.
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "json".to_string(),
        }
    }
}

/// Configuration for a single route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Route pattern (e.g., "/collections/:kind").
    pub pattern: String,
    /// Handler name.
    pub handler: String,
    /// HTTP methods this route accepts.
    #[serde(default = "default_methods")]
    pub methods: Vec<String>,
}

fn default_methods() -> Vec<String> {
    vec!["GET".to_string()]
}

impl RouteConfig {
    /// Create a new route configuration.
    pub fn new(pattern: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            handler: handler.into(),
            methods: default_methods(),
        }
    }

    /// Set allowed HTTP methods.
    pub fn with_methods(mut self, methods: Vec<&str>) -> Self {
        self.methods = methods.into_iter().map(String::from).collect();
        self
    }

    /// Whether the route accepts the given method name.
    pub fn allows(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m.eq_ignore_ascii_case(method))
    }

    /// Match a request path (without query string) against the pattern.
    ///
    /// `:name` segments capture one path segment. Trailing slashes are ignored.
    pub fn match_path(&self, path: &str) -> Option<HashMap<String, String>> {
        let pattern: Vec<&str> = self.pattern.split('/').filter(|s| !s.is_empty()).collect();
        let actual: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        if pattern.len() != actual.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (expected, segment) in pattern.iter().zip(actual.iter()) {
            if let Some(name) = expected.strip_prefix(':') {
                params.insert(name.to_string(), crate::url_decode(segment));
            } else if expected != segment {
                return None;
            }
        }

        Some(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_sections_missing() {
        let config = StorefrontConfig::from_toml_str("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.carousel.autoplay_interval_ms, 6000);
        assert_eq!(config.theme.preference_key, "lumiere.selected-font");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = StorefrontConfig::from_toml_str(
            r#"
[carousel]
autoplay_interval_ms = 4000

[logging]
format = "human"
"#,
        )
        .unwrap();

        assert_eq!(config.carousel.autoplay_interval_ms, 4000);
        assert_eq!(config.carousel.swipe_threshold, 10_000.0);
        assert_eq!(config.logging.format, "human");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(StorefrontConfig::from_toml_str("[carousel\nbroken").is_err());
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let config = StorefrontConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(StorefrontConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_route_param_capture() {
        let route = RouteConfig::new("/collections/:kind", "collection");
        let params = route.match_path("/collections/gems/").unwrap();
        assert_eq!(params.get("kind").map(String::as_str), Some("gems"));

        assert!(route.match_path("/collections").is_none());
        assert!(route.match_path("/products/gems").is_none());
    }

    #[test]
    fn test_root_route() {
        let route = RouteConfig::new("/", "home");
        assert!(route.match_path("/").is_some());
        assert!(route.match_path("").is_some());
        assert!(route.match_path("/font").is_none());
    }

    #[test]
    fn test_route_methods() {
        let route = RouteConfig::new("/font", "font").with_methods(vec!["GET", "POST"]);
        assert!(route.allows("post"));
        assert!(!route.allows("DELETE"));
    }
}
