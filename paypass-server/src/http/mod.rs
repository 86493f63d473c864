//! HTTP server module.
//!
//! Provides the mock JSON API consumed by the PayPass front-ends.

mod middleware;
pub mod routes;

pub use middleware::{create_cors_layer, create_panic_layer, create_trace_layer};
pub use routes::{create_router, create_router_with_api, AppState};
