use axum::Router;

use super::AppState;

mod contact;
mod newsletter;
pub mod schema;
mod submission;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api", newsletter::router().merge(contact::router()))
}
