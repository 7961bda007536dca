use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::domain::ValidationError;

pub mod schema;

pub type AppResult<T, E = AppError> = std::result::Result<T, E>;

/// Everything a form endpoint can fail with.
///
/// Validation problems are the caller's to fix and are echoed back. The
/// other variants only ever expose the endpoint's generic `message`; their
/// source is logged for the operator.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{message}")]
    Delivery {
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },
    #[error("{message}")]
    MalformedBody {
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            // Unparsable bodies share the generic failure path.
            Self::MalformedBody { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Delivery { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::Validation(e) => {
                tracing::info!(reason = %e, "rejected form submission");
            }
            Self::Delivery { source, .. } => {
                tracing::error!(error = ?source, "failed to deliver form submission");
            }
            Self::MalformedBody { source, .. } => {
                tracing::warn!(error = ?source, "failed to parse form submission");
            }
        }

        (
            self.status_code(),
            Json(schema::Error {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
