//! Public SDK for Lumiere storefront workloads.
//!
//! This crate re-exports the platform and storefront crates:
//!
//! ```ignore
//! use lumiere_sdk::prelude::*;
//!
//! async fn render(ctx: RequestContext, sink: &mut StreamingSink<Body, Error>) -> anyhow::Result<()> {
//!     let logger = StructuredLogger::new(ctx.request_id.clone());
//!     logger.info("Handling request");
//!
//!     sink.send_shell(&shell.render_opening()).await?;
//!
//!     let catalog = Catalog::for_route(ctx.param("kind").unwrap_or_default());
//!     let query = CollectionQuery::from_query_string(&ctx.raw_query);
//!     let results = filter_sort(catalog.products(), &query);
//!
//!     sink.send_section("grid", &render_grid(&results)).await?;
//!     sink.finish(&shell.render_closing()).await?;
//!     Ok(())
//! }
//! ```

pub use lumiere_carousel;
pub use lumiere_catalog;
pub use lumiere_core;
pub use lumiere_observability;
pub use lumiere_streaming;
pub use lumiere_theme;

/// Prelude for convenient imports.
pub mod prelude {
    pub use lumiere_carousel::prelude::*;
    pub use lumiere_catalog::prelude::*;
    pub use lumiere_core::*;
    pub use lumiere_observability::*;
    pub use lumiere_streaming::*;
    pub use lumiere_theme::prelude::*;
}
