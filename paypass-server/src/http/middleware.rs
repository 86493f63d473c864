//! HTTP middleware configuration.

use std::any::Any as PanicPayload;

use axum::body::Body;
use axum::http::{header, HeaderName, HeaderValue, Method, Response, StatusCode};
use serde_json::json;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{Profile, ServerConfig};

/// Create the CORS policy for the configured profile.
///
/// Production only admits the front-end origins and allows credentials;
/// the mock profile accepts any origin.
pub fn create_cors_layer(config: &ServerConfig) -> CorsLayer {
    match config.profile {
        Profile::Production => {
            let origins: Vec<HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_credentials(true)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    header::CONTENT_TYPE,
                    header::AUTHORIZATION,
                    HeaderName::from_static("x-requested-with"),
                ])
        }
        Profile::Mock => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    }
}

/// Create the trace layer for request logging.
pub fn create_trace_layer() -> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
}

/// Turn handler panics into `500 {"error": ...}` responses.
pub fn create_panic_layer() -> CatchPanicLayer<fn(Box<dyn PanicPayload + Send + 'static>) -> Response<Body>> {
    CatchPanicLayer::custom(panic_response as fn(_) -> _)
}

fn panic_response(err: Box<dyn PanicPayload + Send + 'static>) -> Response<Body> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        String::from("Internal Server Error")
    };

    tracing::error!("Handler panicked: {}", message);

    let body = json!({ "error": message }).to_string();
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}
