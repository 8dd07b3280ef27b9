//! CORS headers and preflight responses.

use axum::{
    Router,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tower_http::set_header::SetResponseHeaderLayer;

/// Methods accepted by the config endpoint.
pub const CONFIG_METHODS: &str = "GET, POST, OPTIONS";
/// Methods accepted by the login endpoint.
pub const LOGIN_METHODS: &str = "POST, OPTIONS";

/// Stamps the CORS headers onto every response produced by `router`,
/// error responses included.
pub fn with_cors<S>(router: Router<S>, methods: &'static str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(methods),
        ))
}

/// Labels every response produced by `router` as JSON unless the handler
/// already set a content type, empty preflight replies included.
pub fn with_json_content_type<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(SetResponseHeaderLayer::if_not_present(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    ))
}

/// Answers a browser preflight: 200 with an empty body.
pub fn preflight() -> Response {
    StatusCode::OK.into_response()
}
