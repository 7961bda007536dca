use anyhow::{anyhow, Context};
use axum::{extract::rejection::JsonRejection, Json};
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::schema::Acknowledgement;
use crate::{
    app::{
        error::{AppError, AppResult},
        AppState,
    },
    domain::{Submission, ValidationError},
};

/// Validates `body` as an `S`, then mails the submitter's confirmation and
/// the admin notification concurrently. Both sends have to succeed.
#[tracing::instrument(
    name = "Accept a form submission",
    skip_all,
    fields(submitter = tracing::field::Empty)
)]
pub(super) async fn accept<S, B>(
    state: &AppState,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Acknowledgement>>
where
    S: Submission + TryFrom<B, Error = ValidationError>,
    B: DeserializeOwned + Default,
{
    let malformed = |source: anyhow::Error| AppError::MalformedBody {
        message: S::FAILED,
        source,
    };

    let Json(body) = body.map_err(|rejection| malformed(rejection.into()))?;
    let body: B = match body {
        Value::Object(fields) => serde_json::from_value(Value::Object(fields))
            .context("The submitted fields have unexpected types.")
            .map_err(malformed)?,
        Value::Null => return Err(malformed(anyhow!("The request body is null."))),
        // Arrays and scalars have no named fields to read.
        _ => B::default(),
    };
    let submission = S::try_from(body)?;
    tracing::Span::current().record(
        "submitter",
        tracing::field::display(submission.submitter()),
    );

    let [confirmation, notification] = submission
        .messages(&state.mailboxes, Utc::now())
        .context("Failed to render the submission emails.")
        .map_err(|source| AppError::Delivery {
            message: S::FAILED,
            source,
        })?;

    tokio::try_join!(
        state.email_client.send_email(&confirmation),
        state.email_client.send_email(&notification),
    )
    .context("Failed to send the submission emails.")
    .map_err(|source| AppError::Delivery {
        message: S::FAILED,
        source,
    })?;

    Ok(Json(Acknowledgement {
        message: S::ACCEPTED.to_owned(),
    }))
}
