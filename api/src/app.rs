//! Application factory
//!
//! Builds the actix-web application around shared verification state.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use verimail_core::repositories::TokenStore;
use verimail_core::services::Notifier;

use crate::handlers::{json_error_handler, not_found};
use crate::routes::verification::{missing_token, send_verification, verify_token, AppState};
use crate::telemetry::RouteOnlyRootSpan;

/// Create and configure the application with all dependencies
pub fn create_app<S, N>(
    app_state: web::Data<AppState<S, N>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<tracing_actix_web::StreamSpan<actix_web::body::BoxBody>>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: TokenStore + 'static,
    N: Notifier + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(TracingLogger::<RouteOnlyRootSpan>::new())
        .route("/health", web::get().to(health_check))
        .route("/send", web::post().to(send_verification::<S, N>))
        .route("/verify/{token}", web::get().to(verify_token::<S, N>))
        .route("/verify/", web::get().to(missing_token))
        .route("/verify", web::get().to(missing_token))
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "verimail-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
