//! Page error type with IntoResponse
//!
//! Errors that escape a handler become the 404 or 500 HTML page.
//! Create/edit/delete failures never get here; handlers flash them instead.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::db::repos::DbError;
use crate::render;

/// Handler error with automatic HTTP status mapping
#[derive(Debug)]
pub enum PageError {
    /// No row for the requested id, or no such route (404)
    NotFound { resource: &'static str, id: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match &self {
            Self::NotFound { resource, id } => {
                tracing::debug!("{} '{}' not found", resource, id);
                (StatusCode::NOT_FOUND, Html(render::not_found())).into_response()
            }
            Self::Database(e) => {
                // Log the actual error, show the generic page
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, Html(render::server_error())).into_response()
            }
        }
    }
}

impl From<DbError> for PageError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}
