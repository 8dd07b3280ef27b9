//! Router assembly.

use axum::{Router, extract::DefaultBodyLimit, middleware, routing::any};

use crate::cors::{CONFIG_METHODS, LOGIN_METHODS, with_cors, with_json_content_type};
use crate::handlers::{config_manager, login};
use crate::middleware::log_requests;
use crate::state::AppState;

/// Largest request body the config endpoint buffers, matching the 6 MB
/// payload cap of the functions platform the panel was first deployed on.
pub const CONFIG_BODY_LIMIT: usize = 6 * 1024 * 1024;

/// Mounts both endpoints under `api_path` (e.g. `/.netlify/functions`):
/// `{api_path}/config-manager` and `{api_path}/login`.
pub fn router(state: AppState, api_path: &str) -> Router {
    let prefix = api_path.trim_end_matches('/');

    let config_routes = with_cors(
        Router::new()
            .route(&format!("{}/config-manager", prefix), any(config_manager))
            .layer(DefaultBodyLimit::max(CONFIG_BODY_LIMIT)),
        CONFIG_METHODS,
    );
    let login_routes = with_cors(
        with_json_content_type(Router::new().route(&format!("{}/login", prefix), any(login))),
        LOGIN_METHODS,
    );

    config_routes
        .merge(login_routes)
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}
