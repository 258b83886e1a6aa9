use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("record not found")]
    NotFound,

    #[error("malformed request body: {0}")]
    MalformedInput(#[from] JsonRejection),

    #[error("storage error: {0}")]
    Storage(#[from] sea_orm::DbErr),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => {
                tracing::debug!("not found");
                StatusCode::NOT_FOUND.into_response()
            }
            // Faults are opaque to the caller: status only, no body.
            err => {
                tracing::error!(error = %err, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(%rejection, "unmatched item path");
        AppError::NotFound
    }
}

pub type AppResult<T> = Result<T, AppError>;
