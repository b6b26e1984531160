//! Typed errors and HTTP mapping.

use crate::response::MessageBody;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
    #[error("invalid table name: '{0}'")]
    InvalidTableName(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid request body: {0}")]
    BadRequest(String),
    #[error("request body too large")]
    PayloadTooLarge,
    /// `id` is the raw path segment, echoed back as the client sent it.
    #[error("Book with id {id} is not found")]
    BookNotFound { id: String },
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("storage: {0}")]
    Storage(String),
}

impl AppError {
    pub fn book_not_found(id: impl Into<String>) -> Self {
        AppError::BookNotFound { id: id.into() }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::BookNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Config(_) | AppError::Db(_) | AppError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            // Cause stays in the log; clients get a generic message.
            tracing::error!(error = %self, "request failed");
            "internal server error".to_string()
        } else {
            self.to_string()
        };
        (status, Json(MessageBody { message })).into_response()
    }
}
