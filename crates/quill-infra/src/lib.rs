//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! SQLite access via SeaORM, Argon2 password hashing, JWT session tokens.

pub mod auth;
pub mod database;

pub use auth::{Argon2PasswordService, JwtSessionService};
pub use database::{ConnectionSettings, RequestConnection};
