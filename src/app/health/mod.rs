use axum::{http::StatusCode, routing::get, Router};

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health_check", get(health_check))
}

/// Liveness probe: the process is up and routing requests.
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}
