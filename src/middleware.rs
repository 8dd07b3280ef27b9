//! Request logging middleware.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use nanoid::nanoid;
use std::time::Instant;
use tracing::info;

use crate::colors::{paint_id, paint_status};

/// Tags every request with a short colored id and logs entry, exit status
/// and latency.
pub async fn log_requests(req: Request<Body>, next: Next) -> Response {
    let id = nanoid!(5);
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    info!("{} → {} {}", paint_id(&id), method, path);

    let response = next.run(req).await;

    info!(
        "{} ← {} {} ({}ms)",
        paint_id(&id),
        method,
        paint_status(response.status()),
        start.elapsed().as_millis()
    );
    response
}
