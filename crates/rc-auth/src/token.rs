//! Bearer tokens: HS256-signed JWTs carrying the user's identity.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use rc_types::{Identity, UserId};

use crate::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Claims carried by an issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID.
    pub id: String,
    pub username: String,
    /// Expiration time (Unix timestamp, seconds).
    pub exp: i64,
}

/// Issues and verifies bearer tokens with a shared secret.
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    config: AuthConfig,
}

impl TokenIssuer {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.secret()),
            decoding: DecodingKey::from_secret(config.secret()),
            config,
        }
    }

    /// Sign a token for `identity`, valid for the configured TTL.
    pub fn issue(&self, identity: &Identity) -> AuthResult<String> {
        let exp = (Utc::now() + self.config.token_ttl()).timestamp();
        self.issue_until(identity, exp)
    }

    fn issue_until(&self, identity: &Identity, exp: i64) -> AuthResult<String> {
        let claims = Claims {
            id: identity.id.to_string(),
            username: identity.username.clone(),
            exp,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::Internal(format!("token encoding failed: {e}")))
    }

    /// Check signature, algorithm, and expiry, and recover the identity.
    pub fn verify(&self, token: &str) -> AuthResult<Identity> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        let data = decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;
        let id: UserId = data
            .claims
            .id
            .parse()
            .map_err(|_| AuthError::InvalidToken("malformed user id".into()))?;
        Ok(Identity::new(id, data.claims.username))
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
