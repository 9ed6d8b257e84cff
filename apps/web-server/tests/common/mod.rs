//! Shared helpers for the integration suites.

#![allow(dead_code)]

use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use tempfile::TempDir;

use quill_infra::auth::SessionConfig;
use quill_infra::database::ConnectionSettings;
use web_server::state::AppState;

pub const TEST_SECRET: &str = "test-secret";

/// A scoped SQLite database for one test. The file disappears with the
/// tempdir when the value drops.
pub struct TestDb {
    pub settings: ConnectionSettings,
    _dir: TempDir,
}

/// Create a fresh database file and initialize the schema.
pub async fn test_db() -> TestDb {
    let dir = tempfile::tempdir().expect("create temp dir");
    let url = format!("sqlite://{}/blog.db?mode=rwc", dir.path().display());

    let conn = Database::connect(url.as_str())
        .await
        .expect("connect for schema init");
    Migrator::fresh(&conn).await.expect("initialize schema");
    conn.close().await.expect("close schema connection");

    TestDb {
        settings: ConnectionSettings::new(url),
        _dir: dir,
    }
}

/// Application state wired to the given database.
pub fn test_state(settings: ConnectionSettings) -> AppState {
    AppState::from_parts(
        settings,
        SessionConfig {
            secret: TEST_SECRET.to_string(),
            ..SessionConfig::default()
        },
    )
}
