//! Application state - shared across all handlers.
//!
//! Deliberately holds no live connection: the datastore is reached through
//! the request-scoped connection installed by `DbScope`.

use std::sync::Arc;

use quill_core::ports::{PasswordService, SessionService};
use quill_infra::auth::{Argon2PasswordService, JwtSessionService, SessionConfig};
use quill_infra::database::ConnectionSettings;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub db: ConnectionSettings,
    pub passwords: Arc<dyn PasswordService>,
    pub sessions: Arc<dyn SessionService>,
}

impl AppState {
    /// Build the application state from configuration.
    pub fn new(config: &AppConfig) -> Self {
        Self::from_parts(config.database.clone(), config.session.clone())
    }

    /// Build the application state from its parts.
    pub fn from_parts(db: ConnectionSettings, session: SessionConfig) -> Self {
        Self {
            db,
            passwords: Arc::new(Argon2PasswordService::new()),
            sessions: Arc::new(JwtSessionService::new(session)),
        }
    }
}
