use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use blog_client::BlogClientError;
use thiserror::Error;
use tracing::error;

/// Every backend failure becomes `500` with the raw error text. The admin
/// surface is only reachable by trusted callers.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(transparent)]
    Backend(#[from] BlogClientError),
}

pub(crate) type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        error!(error = %message, "backend call failed");

        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}
