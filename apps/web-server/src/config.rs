//! Application configuration loaded from environment variables.

use std::env;

use quill_infra::auth::SessionConfig;
use quill_infra::database::ConnectionSettings;

const DEFAULT_DATABASE_URL: &str = "sqlite://blog.db?mode=rwc";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: ConnectionSettings,
    pub session: SessionConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = ConnectionSettings::new(
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
        );

        let secret = env::var("SECRET_KEY").unwrap_or_else(|_| "dev".to_string());
        if secret == "dev" {
            tracing::warn!("Using default session secret. Set SECRET_KEY for production use.");
        }

        let session = SessionConfig {
            secret,
            ttl_hours: env::var("SESSION_TTL_HOURS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(24),
            ..SessionConfig::default()
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            session,
        }
    }
}
