use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use liftplan_domain::{GenerateError, ReadError, StorageError, UpdateError};
use liftplan_storage::wire::WireError;
use log::error;
use serde_json::json;

use crate::log as app_log;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("missing or invalid bearer token")]
    Unauthorized,
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Invalid(#[from] WireError),
    #[error(transparent)]
    Log(#[from] app_log::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Invalid(_) => StatusCode::BAD_REQUEST,
            AppError::Read(err) => read_status(err),
            AppError::Generate(err) => match err {
                GenerateError::Validation(_) | GenerateError::Coach(_) => StatusCode::BAD_REQUEST,
                GenerateError::InsufficientExercises { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                GenerateError::Read(err) => read_status(err),
                GenerateError::Update(err) => match err {
                    UpdateError::Conflict => StatusCode::CONFLICT,
                    UpdateError::Storage(err) => storage_status(err),
                    UpdateError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
                },
            },
            AppError::Log(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized => "unauthorized",
            AppError::Invalid(_) | AppError::Generate(GenerateError::Validation(_)) => {
                "validation_error"
            }
            AppError::Generate(GenerateError::Coach(_)) => "unknown_name",
            AppError::Generate(GenerateError::InsufficientExercises { .. }) => {
                "insufficient_exercises"
            }
            AppError::Read(ReadError::NotFound)
            | AppError::Generate(GenerateError::Read(ReadError::NotFound)) => "not_found",
            AppError::Read(_)
            | AppError::Generate(GenerateError::Read(_) | GenerateError::Update(_))
            | AppError::Log(_) => "internal_error",
        }
    }
}

fn read_status(err: &ReadError) -> StatusCode {
    match err {
        ReadError::NotFound => StatusCode::NOT_FOUND,
        ReadError::Storage(err) => storage_status(err),
        ReadError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn storage_status(err: &StorageError) -> StatusCode {
    match err {
        StorageError::NoConnection => StatusCode::SERVICE_UNAVAILABLE,
        StorageError::Poisoned | StorageError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("request failed: {self}");
        }
        (
            status,
            Json(json!({
                "error": self.code(),
                "message": self.to_string(),
            })),
        )
            .into_response()
    }
}
