//! Authentication and session ports.

use uuid::Uuid;

/// Claims carried by a session token. The user id is the only field the
/// application reads back; `exp` is expiry bookkeeping.
#[derive(Debug, Clone)]
pub struct SessionClaims {
    pub user_id: Uuid,
    pub exp: i64,
}

/// Session token service - issues and verifies the signed, client-held
/// token that identifies a logged-in user across requests.
pub trait SessionService: Send + Sync {
    /// Issue a signed session token for a user.
    fn issue(&self, user_id: Uuid) -> Result<String, AuthError>;

    /// Decode and verify a session token.
    fn decode(&self, token: &str) -> Result<SessionClaims, AuthError>;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password with a fresh random salt.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a stored digest. A malformed digest is a
    /// mismatch, not an error.
    fn verify(&self, password: &str, digest: &str) -> bool;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Hashing error: {0}")]
    HashingError(String),
}
