//! Error handling - fatal failures rendered as a plain error page.
//!
//! Validation and conflict errors never take this path: handlers re-render
//! their form with a message instead (see `handlers::auth`).

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use quill_core::error::RepoError;
use quill_infra::database::ConnectionError;

use crate::pages;

/// Application-level error type for failures no handler recovers from.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Database(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Database(msg) => write!(f, "Database error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Database(msg) | AppError::Internal(msg) = self {
            tracing::error!("Request failed: {}", msg);
        }

        HttpResponse::build(self.status_code())
            .content_type(ContentType::html())
            .body(pages::error_page(self.status_code().as_u16()))
    }
}

// Conversion from repository errors
impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("resource not found".to_string()),
            RepoError::Connection(msg) => AppError::Database(msg),
            RepoError::Query(msg) => AppError::Database(msg),
            RepoError::Constraint(msg) => {
                // Handlers intercept conflicts; one reaching this far is a bug.
                AppError::Internal(format!("unhandled constraint violation: {}", msg))
            }
        }
    }
}

impl From<ConnectionError> for AppError {
    fn from(err: ConnectionError) -> Self {
        AppError::Database(err.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
