//! Health check endpoint for Kubernetes-style probes.

use axum::http::StatusCode;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Touches neither the store nor the cache.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
