// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every handler failure is one of these three
/// The Display text is sent to the client verbatim as `message`
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlbumError {
    /// Malformed, missing or out-of-range input
    #[error("{0}")]
    Validation(String),

    /// The id does not resolve to a row
    #[error("{0}")]
    NotFound(String),

    /// Any storage failure, message passed through from the driver
    #[error("{0}")]
    Database(String),
}

impl AlbumError {
    pub fn not_found(entity: &str) -> Self {
        AlbumError::NotFound(format!("{} not found", entity))
    }
}

impl From<sqlx::Error> for AlbumError {
    fn from(e: sqlx::Error) -> Self {
        AlbumError::Database(e.to_string())
    }
}

/// Convert AlbumError to HTTP response
/// DOCUMENTATION: Renders the `{success: false, message}` envelope
impl ResponseError for AlbumError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "success": false,
            "message": self.to_string(),
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AlbumError::Validation(_) => StatusCode::BAD_REQUEST,
            AlbumError::NotFound(_) => StatusCode::NOT_FOUND,
            AlbumError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AlbumError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AlbumError::not_found("Map").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AlbumError::Database("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn test_envelope_body() {
        let resp = AlbumError::not_found("Marker").error_response();
        let body = to_bytes(resp.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(value, json!({ "success": false, "message": "Marker not found" }));
    }
}
