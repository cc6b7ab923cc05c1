// src/errors.rs
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Invalid JWT Token")]
    Unauthorized,

    #[error("Invalid user")]
    InvalidUser,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password verification failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("Token signing failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Blocking task failed: {0}")]
    Blocking(#[from] actix_web::error::BlockingError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PortalError>;

/// Body of every JSON error response.
#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

impl PortalError {
    /// Machine-readable code sent alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            PortalError::Unauthorized => "unauthorized",
            PortalError::InvalidUser => "invalid_user",
            PortalError::InvalidPassword => "invalid_password",
            PortalError::Validation(_) => "invalid_input",
            PortalError::NotFound(_) => "not_found",
            _ => "internal",
        }
    }
}

impl ResponseError for PortalError {
    fn status_code(&self) -> StatusCode {
        match self {
            PortalError::Unauthorized => StatusCode::UNAUTHORIZED,
            PortalError::InvalidUser
            | PortalError::InvalidPassword
            | PortalError::Validation(_) => StatusCode::BAD_REQUEST,
            PortalError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self {
            // Login and auth failures keep their historical plain-text bodies.
            PortalError::Unauthorized | PortalError::InvalidUser | PortalError::InvalidPassword => {
                HttpResponse::build(status)
                    .content_type(ContentType::plaintext())
                    .body(self.to_string())
            }
            PortalError::Validation(message) | PortalError::NotFound(message) => {
                HttpResponse::build(status).json(ErrorBody {
                    code: self.code(),
                    message: message.clone(),
                })
            }
            _ => {
                log::error!("Request failed: {}", self);
                HttpResponse::build(status).json(ErrorBody {
                    code: self.code(),
                    message: "Internal server error".to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_rt::test]
    async fn test_unauthorized_renders_plain_text() {
        let resp = PortalError::Unauthorized.error_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(body.as_ref(), b"Invalid JWT Token");
    }

    #[actix_rt::test]
    async fn test_not_found_renders_structured_json() {
        let resp = PortalError::NotFound("District 9 not found".to_string()).error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], "not_found");
        assert_eq!(json["message"], "District 9 not found");
    }

    #[actix_rt::test]
    async fn test_internal_errors_hide_details() {
        let err = PortalError::Config("JWT_SECRET must be set".to_string());
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], "internal");
        assert_eq!(json["message"], "Internal server error");
    }

    #[test]
    fn test_login_failures_are_bad_requests() {
        assert_eq!(PortalError::InvalidUser.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(PortalError::InvalidPassword.to_string(), "Invalid password");
    }
}
