//! Embedded storefront configuration.

use lumiere_sdk::lumiere_core::StorefrontConfig;

const STOREFRONT_TOML: &str = include_str!("../storefront.toml");

/// Parse the embedded settings. On a parse failure the defaults are used
/// and the error is returned alongside so the caller can log it.
pub fn storefront_config() -> (StorefrontConfig, Option<anyhow::Error>) {
    match StorefrontConfig::from_toml_str(STOREFRONT_TOML) {
        Ok(config) => (config, None),
        Err(e) => (StorefrontConfig::default(), Some(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let (config, err) = storefront_config();
        assert!(err.is_none());
        assert_eq!(config, StorefrontConfig::default());
    }
}
