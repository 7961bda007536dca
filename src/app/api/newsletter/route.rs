use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;

use super::schema;
use crate::{
    app::{api::schema::Acknowledgement, api::submission::accept, error::AppResult, AppState},
    domain::newsletter::NewsletterSubmission,
};

#[tracing::instrument(name = "Subscribe to the newsletter", skip(state, body))]
pub async fn subscribe(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Acknowledgement>> {
    accept::<NewsletterSubmission, schema::SubscribeBody>(&state, body).await
}
