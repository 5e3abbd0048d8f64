use std::fmt;

use chrono::Duration;

use crate::error::{AuthError, AuthResult};

/// Default lifetime of an issued token.
pub const DEFAULT_TOKEN_TTL_HOURS: u64 = 72;

/// Token-signing configuration.
///
/// Built once at startup from the server configuration and handed to the
/// [`TokenIssuer`](crate::TokenIssuer). Read-only afterwards.
#[derive(Clone)]
pub struct AuthConfig {
    secret: Vec<u8>,
    token_ttl: Duration,
}

impl AuthConfig {
    /// Fails when `secret` is empty or the TTL does not fit a duration.
    pub fn new(secret: impl Into<String>, token_ttl_hours: u64) -> AuthResult<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(AuthError::Config("token secret must not be empty".into()));
        }
        let hours = i64::try_from(token_ttl_hours)
            .ok()
            .and_then(Duration::try_hours)
            .filter(|d| *d > Duration::zero())
            .ok_or_else(|| AuthError::Config(format!("invalid token ttl: {token_ttl_hours}h")))?;
        Ok(Self {
            secret: secret.into_bytes(),
            token_ttl: hours,
        })
    }

    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_secret_is_rejected() {
        let err = AuthConfig::new("", DEFAULT_TOKEN_TTL_HOURS).unwrap_err();
        assert!(matches!(err, AuthError::Config(_)));
    }

    #[test]
    fn zero_ttl_is_rejected() {
        assert!(AuthConfig::new("secret", 0).is_err());
    }

    #[test]
    fn debug_redacts_secret() {
        let config = AuthConfig::new("hunter2", 1).unwrap();
        let dbg = format!("{config:?}");
        assert!(!dbg.contains("hunter2"));
        assert!(dbg.contains("<redacted>"));
    }

    #[test]
    fn ttl_in_hours() {
        let config = AuthConfig::new("s", DEFAULT_TOKEN_TTL_HOURS).unwrap();
        assert_eq!(config.token_ttl(), Duration::hours(72));
    }
}
