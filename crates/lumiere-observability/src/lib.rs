//! Request-scoped structured logging for storefront workloads.
//!
//! - `StructuredLogger` - JSON or human log lines tagged with the request id
//! - `LogBuilder` - Fluent structured fields

mod logging;

pub use logging::*;

// Re-export RequestId from lumiere-core for convenience
pub use lumiere_core::RequestId;
