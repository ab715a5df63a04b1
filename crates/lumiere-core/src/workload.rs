//! Workload manifest, route table and errors.

use serde::{Deserialize, Serialize};

use crate::config::RouteConfig;
use crate::context::RouteParams;

/// Workload manifest - the routes a deployable storefront unit serves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadManifest {
    /// Unique name for this workload.
    pub name: String,
    /// Semantic version.
    pub version: String,
    /// Routes this workload handles, matched in order.
    pub routes: Vec<RouteConfig>,
}

/// Result of resolving a request against a manifest.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteMatch<'a> {
    /// A route matched the path and accepts the method.
    Found(&'a RouteConfig, RouteParams),
    /// A route matched the path but not the method.
    MethodNotAllowed,
    /// No route matched.
    NotFound,
}

impl RouteMatch<'_> {
    /// HTTP status the match maps to before any handler runs.
    pub fn status(&self) -> http::StatusCode {
        match self {
            Self::Found(..) => http::StatusCode::OK,
            Self::MethodNotAllowed => http::StatusCode::METHOD_NOT_ALLOWED,
            Self::NotFound => http::StatusCode::NOT_FOUND,
        }
    }
}

impl WorkloadManifest {
    /// Create a new workload manifest.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            routes: Vec::new(),
        }
    }

    /// Add a route to this workload.
    pub fn with_route(mut self, route: RouteConfig) -> Self {
        self.routes.push(route);
        self
    }

    /// Resolve a method and path to a route.
    pub fn resolve(&self, method: &str, path: &str) -> RouteMatch<'_> {
        let mut path_matched = false;
        for route in &self.routes {
            if let Some(params) = route.match_path(path) {
                if route.allows(method) {
                    return RouteMatch::Found(route, params);
                }
                path_matched = true;
            }
        }

        if path_matched {
            RouteMatch::MethodNotAllowed
        } else {
            RouteMatch::NotFound
        }
    }
}

/// Error type for workload operations.
#[derive(Debug, thiserror::Error)]
pub enum WorkloadError {
    #[error("Shell not sent before sections")]
    ShellNotSent,

    #[error("Streaming error: {0}")]
    StreamError(String),

    #[error("Render error: {0}")]
    Render(String),
}
