use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;

use super::schema;
use crate::{
    app::{api::schema::Acknowledgement, api::submission::accept, error::AppResult, AppState},
    domain::contact::ContactSubmission,
};

#[tracing::instrument(name = "Send a contact inquiry", skip(state, body))]
pub async fn contact(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Acknowledgement>> {
    accept::<ContactSubmission, schema::ContactBody>(&state, body).await
}
