use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;

use verimail_api::telemetry::init_tracing;
use verimail_api::{create_app, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = verimail_infra::load_config();
    init_tracing(&config.logging);

    info!(
        environment = %config.environment,
        "Starting Verimail API Server"
    );

    let services = verimail_infra::initialize(&config)
        .context("Failed to initialize infrastructure services")?;
    services.check_mail_backend().await;
    let state = web::Data::new(AppState::new(services.verification_service()));

    let bind_address = config.server.bind_address();
    info!(
        bind = %bind_address,
        public_base_url = %config.server.public_base_url,
        "Server will bind to address"
    );

    let mut server = HttpServer::new(move || create_app(state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("HTTP server terminated with an error")
}
