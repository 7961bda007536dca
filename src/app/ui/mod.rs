use axum::Router;

use super::AppState;

mod asset;
pub mod form;
mod home;
pub mod not_found;

pub fn router() -> Router<AppState> {
    home::router().merge(asset::router())
}
