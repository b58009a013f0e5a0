use actix_web::{web, HttpResponse};

use verimail_core::repositories::TokenStore;
use verimail_core::services::Notifier;
use verimail_shared::utils::mask_email;

use super::AppState;
use crate::dto::VerifyResponse;
use crate::handlers::ApiError;

/// Handler for GET /verify/{token}
///
/// Unknown and already used tokens answer `{"valid": false}` with status 200.
/// A removal that cannot be persisted answers 500 and leaves the token
/// redeemable.
pub async fn verify_token<S, N>(
    state: web::Data<AppState<S, N>>,
    token: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    S: TokenStore + 'static,
    N: Notifier + 'static,
{
    let result = state.verification_service.consume(&token).await?;

    match &result.email {
        Some(email) => tracing::info!(recipient = %mask_email(email), "Email verified"),
        None => tracing::debug!("Verification link rejected"),
    }

    Ok(HttpResponse::Ok().json(VerifyResponse {
        valid: result.valid,
    }))
}

/// Handler for GET /verify/ with the token segment left empty
pub async fn missing_token() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MissingToken)
}
