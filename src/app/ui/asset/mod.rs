use axum::Router;
use tower_http::services::ServeDir;

use crate::app::AppState;

/// Stylesheet, form script, images and the promo video, straight from disk.
pub fn router() -> Router<AppState> {
    Router::new().nest_service("/assets", ServeDir::new("assets"))
}
