//! Error types for the student directory
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::debug;

// == Directory Error Enum ==
/// Unified error type for the student directory.
///
/// Every variant maps to a bare status code; callers never get an error body.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// No student carries the requested id
    #[error("Student not found: {0}")]
    NotFound(i64),

    /// Path segment is not a base-10 integer
    #[error("Invalid student id: {0:?}")]
    InvalidId(String),

    /// Request body is not a Student-shaped JSON object
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// Method is not handled on this path
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),
}

impl DirectoryError {
    /// Status code reported to the caller for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            DirectoryError::NotFound(_) => StatusCode::NOT_FOUND,
            DirectoryError::InvalidId(_) => StatusCode::BAD_REQUEST,
            DirectoryError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            DirectoryError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        debug!("Request rejected: {}", self);
        self.status().into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the student directory.
pub type Result<T> = std::result::Result<T, DirectoryError>;
