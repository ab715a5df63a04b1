//! Shell-first streaming primitives for storefront pages.
//!
//! - `Shell` / `HeadContent` - Page frame rendered before any section
//! - `StreamingSink` - Enforces shell-before-sections ordering over any byte sink

mod shell;
mod sink;

pub use shell::*;
pub use sink::*;
