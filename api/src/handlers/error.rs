//! Mapping of domain failures onto HTTP responses
//!
//! Every error body has the shape
//! `{"error": code, "message": text, "timestamp": rfc3339}`.

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};

use verimail_core::errors::{DomainError, ValidationError};
use verimail_shared::errors::{error_codes, ErrorResponse};
use verimail_shared::utils::mask_email;

/// Error returned by the verification handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Failure reported by the verification service
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request body could not be read as the expected JSON
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Verification link without a token
    #[error("Token is required")]
    MissingToken,
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidBody(_) | ApiError::MissingToken => error_codes::BAD_REQUEST,
            ApiError::Domain(DomainError::Validation(ValidationError::InvalidEmail { .. })) => {
                error_codes::EMAIL_INVALID
            }
            ApiError::Domain(DomainError::Persistence(_)) => error_codes::STORAGE_ERROR,
            ApiError::Domain(DomainError::Delivery { .. }) => error_codes::DELIVERY_ERROR,
        }
    }

    /// Message shown to clients; storage paths and relay details stay in the logs
    fn public_message(&self) -> String {
        match self {
            ApiError::InvalidBody(detail) => format!("Invalid request body: {}", detail),
            ApiError::MissingToken => "Token is required".to_string(),
            ApiError::Domain(DomainError::Validation(_)) => "Invalid email address".to_string(),
            ApiError::Domain(DomainError::Persistence(_)) => {
                "Verification state could not be saved, please retry".to_string()
            }
            ApiError::Domain(DomainError::Delivery { .. }) => {
                "Verification email could not be delivered".to_string()
            }
        }
    }

    /// Text written to the logs, with rejected addresses masked
    fn log_message(&self) -> String {
        match self {
            ApiError::Domain(DomainError::Validation(ValidationError::InvalidEmail { email })) => {
                format!("Invalid email address: {}", mask_email(email))
            }
            other => other.to_string(),
        }
    }

    fn body(&self) -> ErrorResponse {
        let response = ErrorResponse::new(self.code(), self.public_message());
        match self {
            ApiError::Domain(DomainError::Validation(_)) => response.add_detail("field", "email"),
            ApiError::MissingToken => response.add_detail("field", "token"),
            _ => response,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) | ApiError::MissingToken => StatusCode::BAD_REQUEST,
            ApiError::Domain(DomainError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Domain(DomainError::Persistence(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Domain(DomainError::Delivery { .. }) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error = self.log_message();
        if status.is_server_error() {
            tracing::error!(error = %error, status = status.as_u16(), "Request failed");
        } else {
            tracing::warn!(error = %error, status = status.as_u16(), "Request rejected");
        }

        HttpResponse::build(status).json(self.body())
    }
}

/// Turn JSON extractor failures into the standard 400 body
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::InvalidBody(err.to_string()).into()
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
