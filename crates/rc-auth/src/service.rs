use tracing::{info, warn};

use rc_types::Identity;

use crate::error::{AuthError, AuthResult};
use crate::password::{hash_password, verify_password};
use crate::token::TokenIssuer;
use crate::traits::UserStore;

/// Outcome of a successful registration or login.
#[derive(Clone, Debug)]
pub struct Session {
    pub identity: Identity,
    pub token: String,
}

/// Registration, login, and token resolution over a [`UserStore`].
pub struct AuthService<S> {
    users: S,
    tokens: TokenIssuer,
}

impl<S: UserStore> AuthService<S> {
    pub fn new(users: S, tokens: TokenIssuer) -> Self {
        Self { users, tokens }
    }

    /// Create a user and sign a token for them.
    ///
    /// Hashing is deliberately slow; call from a blocking context.
    pub fn register(&self, username: &str, password: &str) -> AuthResult<Session> {
        validate_credentials(username, password)?;
        let hash = hash_password(password)?;
        let user = self.users.create(username, &hash)?;
        info!(user = %user.username, id = %user.id, "user registered");
        self.session_for(user.identity())
    }

    /// Check a password and sign a token.
    ///
    /// Unknown users and wrong passwords fail identically.
    pub fn login(&self, username: &str, password: &str) -> AuthResult<Session> {
        let Some(user) = self.users.find_by_username(username)? else {
            warn!(user = %username, "login for unknown user");
            return Err(AuthError::InvalidCredentials);
        };
        if let Err(err) = verify_password(password, &user.password_hash) {
            warn!(user = %username, "login with wrong password");
            return Err(err);
        }
        info!(user = %user.username, "user logged in");
        self.session_for(user.identity())
    }

    /// Resolve the identity behind a bearer token.
    pub fn authenticate(&self, token: &str) -> AuthResult<Identity> {
        self.tokens.verify(token)
    }

    pub fn users(&self) -> &S {
        &self.users
    }

    /// Sign a token for an already-known identity.
    pub fn session_for(&self, identity: Identity) -> AuthResult<Session> {
        let token = self.tokens.issue(&identity)?;
        Ok(Session { identity, token })
    }
}

fn validate_credentials(username: &str, password: &str) -> AuthResult<()> {
    if username.trim().is_empty() {
        return Err(AuthError::InvalidInput("username must not be empty".into()));
    }
    if password.is_empty() {
        return Err(AuthError::InvalidInput("password must not be empty".into()));
    }
    Ok(())
}
