//! HTTP route definitions.

use axum::{
    extract::{OriginalUri, State},
    http::Method,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use jiff::Timestamp;
use serde::Serialize;
use std::sync::Arc;
use tower::ServiceBuilder;

use super::middleware::{create_cors_layer, create_panic_layer, create_trace_layer};
use crate::catalog;
use crate::config::{Profile, ServerConfig};
use crate::error::ServerError;

/// Timestamp reported by the production status route.
pub const STATUS_TIMESTAMP: &str = "2025-07-28T04:22:21.148Z";

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    fn profile(&self) -> Profile {
        self.config.profile
    }
}

/// Root status response.
#[derive(Serialize)]
pub struct StatusResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub timestamp: &'static str,
}

/// Endpoints advertised by `/api/test`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    pub packages: &'static str,
    pub washing_places: &'static str,
    pub users: &'static str,
}

/// `/api/test` response; its shape depends on the profile.
#[derive(Serialize)]
#[serde(untagged)]
pub enum ApiTestResponse {
    Endpoints {
        message: &'static str,
        endpoints: Endpoints,
    },
    Heartbeat {
        message: &'static str,
        timestamp: String,
    },
}

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    build_router(state, None)
}

/// Create the main router, delegating `/api/*` requests no built-in route
/// answers to `api`. The delegated router sees paths with the `/api` prefix
/// stripped; its fallback is replaced by the JSON 404.
pub fn create_router_with_api(state: AppState, api: Router) -> Router {
    build_router(state, Some(api))
}

fn build_router(state: AppState, api: Option<Router>) -> Router {
    let mut routes = Router::new();
    if state.profile() == Profile::Production {
        routes = routes.route("/", get(root).fallback(not_found));
    }

    let mut api_routes = Router::new()
        .route("/test", get(api_test).fallback(not_found))
        .route("/packages", get(list_packages).fallback(not_found))
        .route("/washing-places", get(list_washing_places).fallback(not_found));
    api_routes = match api {
        Some(external) => api_routes.fallback_service(external.fallback(not_found)),
        None => api_routes.fallback(not_found),
    };

    let middleware = ServiceBuilder::new()
        .layer(create_trace_layer())
        .layer(create_cors_layer(&state.config))
        .layer(create_panic_layer());

    routes
        .nest("/api", api_routes)
        .fallback(not_found)
        .with_state(state)
        .layer(middleware)
}

/// Root status endpoint.
async fn root() -> impl IntoResponse {
    Json(StatusResponse {
        message: "PayPass Backend is running!",
        status: "success",
        timestamp: STATUS_TIMESTAMP,
    })
}

/// API smoke-test endpoint.
async fn api_test(State(state): State<AppState>) -> impl IntoResponse {
    let response = match state.profile() {
        Profile::Production => ApiTestResponse::Endpoints {
            message: "API is working!",
            endpoints: Endpoints {
                packages: "/api/packages",
                washing_places: "/api/washing-places",
                users: "/api/users",
            },
        },
        Profile::Mock => ApiTestResponse::Heartbeat {
            message: "Backend server is running!",
            timestamp: now_iso8601(),
        },
    };
    Json(response)
}

/// List service packages.
async fn list_packages(State(state): State<AppState>) -> impl IntoResponse {
    Json(catalog::packages(state.profile()))
}

/// List washing places.
async fn list_washing_places(State(state): State<AppState>) -> impl IntoResponse {
    Json(catalog::washing_places(state.profile()))
}

async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> ServerError {
    ServerError::not_found(format!("Cannot {} {}", method, uri.path()))
}

/// Current UTC time with millisecond precision, e.g. `2025-07-28T04:22:21.148Z`.
fn now_iso8601() -> String {
    Timestamp::now().strftime("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_iso8601_shape() {
        let ts = now_iso8601();
        assert_eq!(ts.len(), "2025-07-28T04:22:21.148Z".len());
        assert!(ts.ends_with('Z'));
        assert_eq!(&ts[10..11], "T");
        assert_eq!(&ts[19..20], ".");
        assert!(ts.parse::<Timestamp>().is_ok());
    }
}
