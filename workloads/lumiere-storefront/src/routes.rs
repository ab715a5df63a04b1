//! Route table.

use lumiere_sdk::lumiere_core::{RouteConfig, WorkloadManifest};

pub const HOME: &str = "home";
pub const COLLECTION: &str = "collection";
pub const FONT: &str = "font";

pub fn manifest() -> WorkloadManifest {
    WorkloadManifest::new("lumiere-storefront", env!("CARGO_PKG_VERSION"))
        .with_route(RouteConfig::new("/", HOME))
        .with_route(RouteConfig::new("/collections/:kind", COLLECTION))
        .with_route(RouteConfig::new("/font", FONT))
}
