//! Core abstractions for the Lumiere storefront workloads.
//!
//! This crate provides the fundamental types:
//! - `StorefrontConfig` - TOML-backed storefront settings
//! - `RouteConfig` / `WorkloadManifest` - Route table and matching
//! - `RequestContext` - Typed request parameters, query string and cookies
//! - `TimingContext` - Request lifecycle tracking

mod config;
mod context;
mod encoding;
mod lifecycle;
mod workload;

pub use config::*;
pub use context::*;
pub use encoding::*;
pub use lifecycle::*;
pub use workload::*;
