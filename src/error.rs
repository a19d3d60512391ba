use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::dto::envelope::ApiResponse;
use crate::utils::validation::{field_errors, FieldErrors};

pub type Result<T> = std::result::Result<T, Error>;

pub const DUPLICATE_APPLICATION_MESSAGE: &str = "You have already applied for this job.";
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed.";
pub const JOB_NOT_FOUND_MESSAGE: &str = "Job not found.";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0:?}")]
    Validation(FieldErrors),

    #[error("Duplicate application")]
    DuplicateApplication,

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn job_not_found() -> Self {
        Error::NotFound(JOB_NOT_FOUND_MESSAGE.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Validation(_) | Error::DuplicateApplication => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = match self {
            Error::BadRequest(msg) | Error::NotFound(msg) => ApiResponse::failure(msg),
            Error::Validation(errors) => ApiResponse::invalid(VALIDATION_FAILED_MESSAGE, errors),
            Error::DuplicateApplication => ApiResponse::failure(DUPLICATE_APPLICATION_MESSAGE),
            other => {
                tracing::error!(error = %other, "request failed");
                ApiResponse::failure("An unexpected error occurred.")
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound("Resource not found".to_string()),
            other => Error::Database(other),
        }
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(errors: validator::ValidationErrors) -> Self {
        Error::Validation(field_errors(&errors))
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::BadRequest(rejection.body_text())
    }
}

// Path parameters are numeric ids; anything unparseable cannot name a row.
impl From<PathRejection> for Error {
    fn from(_: PathRejection) -> Self {
        Error::NotFound("Resource not found".to_string())
    }
}
