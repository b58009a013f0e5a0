use actix_web::{web, HttpResponse};

use verimail_core::repositories::TokenStore;
use verimail_core::services::Notifier;
use verimail_shared::utils::mask_email;

use super::AppState;
use crate::dto::{SendVerificationRequest, SendVerificationResponse};
use crate::handlers::ApiError;

/// Handler for POST /send
///
/// # Request Body
///
/// ```json
/// { "email": "alice@example.com" }
/// ```
///
/// # Responses
///
/// * `200` - `{"message": "Verification email sent"}`
/// * `400` - Malformed body or invalid email address
/// * `500` - Token could not be persisted
/// * `502` - Mail delivery failed; no token remains outstanding
pub async fn send_verification<S, N>(
    state: web::Data<AppState<S, N>>,
    request: web::Json<SendVerificationRequest>,
) -> Result<HttpResponse, ApiError>
where
    S: TokenStore + 'static,
    N: Notifier + 'static,
{
    let email = request.into_inner().email;

    let sent = state.verification_service.send_verification(&email).await?;
    tracing::info!(recipient = %mask_email(&sent.email), "Verification requested");

    Ok(HttpResponse::Ok().json(SendVerificationResponse::sent()))
}
