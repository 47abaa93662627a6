use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::validation::ValidationError;
use services::services::i18n::I18nError;
use thiserror::Error;
use tracing::error;
use utils::response::ApiResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("record not found")]
    NotFound,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("duplicate value: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Database(sqlx::Error),
    #[error(transparent)]
    I18n(#[from] I18nError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return ApiError::Conflict(db_err.message().to_string());
            }
        }
        ApiError::Database(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::I18n(I18nError::MissingBundle(_)) => StatusCode::NOT_FOUND,
            ApiError::Database(_) | ApiError::I18n(_) | ApiError::Other(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("request failed: {}", self);
        }

        let body = Json(ApiResponse::<()>::error(self.to_string()));
        (status, body).into_response()
    }
}
