//! # Quill Web Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::HttpServer;
use tracing_actix_web::TracingLogger;

use web_server::config::AppConfig;
use web_server::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let config = AppConfig::from_env();

    tracing::info!("Starting Quill on {}:{}", config.host, config.port);

    let state = AppState::new(&config);

    HttpServer::new(move || web_server::app(state.clone()).wrap(TracingLogger::default()))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,web_server=debug,quill_infra=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
