use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};

/// Logs method, path, status and latency for every request.
pub async fn log_requests(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let start = Instant::now();
    let response = next.run(req).await;
    let status = response.status();
    let elapsed = start.elapsed();

    // GraphQL validation errors still come back as 200; only transport failures land here
    if status.is_client_error() || status.is_server_error() {
        warn!("{} {} -> {} in {:?}", method, path, status, elapsed);
    } else {
        info!("{} {} -> {} in {:?}", method, path, status, elapsed);
    }

    response
}
