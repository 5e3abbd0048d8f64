//! Error types for identity operations.

use thiserror::Error;

/// Errors from registration, login, and token handling.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A user with this name is already registered.
    #[error("username already exists: {0}")]
    UserExists(String),

    /// Unknown username or wrong password. Deliberately does not say which.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// The bearer token is missing, malformed, expired, or badly signed.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// Registration input was rejected before reaching the registry.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Token-signing configuration is unusable.
    #[error("configuration error: {0}")]
    Config(String),

    /// Password hashing or token encoding failed internally.
    #[error("internal error: {0}")]
    Internal(String),

    /// A lock was poisoned by a panicking writer.
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

impl AuthError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UserExists(_))
    }

    /// `true` when the caller failed to prove who they are.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::InvalidCredentials | Self::InvalidToken(_))
    }
}

/// Convenience type alias for identity operations.
pub type AuthResult<T> = std::result::Result<T, AuthError>;
