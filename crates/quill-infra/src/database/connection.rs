//! Request-scoped connection management.
//!
//! Every request gets its own `RequestConnection`: nothing is opened until
//! the first `acquire`, the opened connection is reused for the rest of the
//! request, and `release` closes it at teardown. Handles are cheap clones
//! sharing one slot; a request's work all happens on one actix worker
//! thread, so the slot needs no locking.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn};
use thiserror::Error;

/// Where the datastore lives. One URL, nothing else.
#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    pub url: String,
}

impl ConnectionSettings {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    fn connect_options(&self) -> ConnectOptions {
        // One physical connection per request; the pool exists only because
        // SeaORM speaks in pools.
        ConnectOptions::new(self.url.clone())
            .max_connections(1)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(true)
            .to_owned()
    }
}

/// Errors from opening or closing the request's connection.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("failed to open database connection: {0}")]
    Open(sea_orm::DbErr),

    #[error("failed to close database connection: {0}")]
    Close(sea_orm::DbErr),
}

#[derive(Default)]
struct Slot {
    conn: Option<DbConn>,
}

/// Lazily-opened, request-scoped connection handle.
#[derive(Clone)]
pub struct RequestConnection {
    settings: ConnectionSettings,
    slot: Rc<RefCell<Slot>>,
}

impl RequestConnection {
    /// Create an unopened handle. No I/O happens here.
    pub fn new(settings: ConnectionSettings) -> Self {
        Self {
            settings,
            slot: Rc::new(RefCell::new(Slot::default())),
        }
    }

    /// Whether a physical connection is currently open.
    pub fn is_open(&self) -> bool {
        self.slot.borrow().conn.is_some()
    }

    /// The request's connection, opened on first call and cached for every
    /// later call within the same request.
    pub async fn acquire(&self) -> Result<DbConn, ConnectionError> {
        if let Some(conn) = self.slot.borrow().conn.clone() {
            return Ok(conn);
        }

        let options = self.settings.connect_options();
        let conn = Database::connect(options)
            .await
            .map_err(ConnectionError::Open)?;

        let mut slot = self.slot.borrow_mut();
        match &slot.conn {
            // Another acquire on this request finished while we were
            // connecting; keep the first connection, drop the duplicate.
            Some(existing) => Ok(existing.clone()),
            None => {
                slot.conn = Some(conn.clone());
                Ok(conn)
            }
        }
    }

    /// Close the connection if one was opened. Idempotent.
    pub async fn release(&self) -> Result<(), ConnectionError> {
        let conn = self.slot.borrow_mut().conn.take();

        if let Some(conn) = conn {
            tracing::debug!("closing request connection");
            conn.close().await.map_err(ConnectionError::Close)?;
        }

        Ok(())
    }
}
