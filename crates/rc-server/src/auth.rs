use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use rc_auth::{AuthService, UserStore};
use rc_types::{Identity, UserId};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

#[derive(Clone, Debug)]
pub enum Credentials {
    Bearer(String),
    Anonymous,
}

impl Credentials {
    /// Read `Authorization: Bearer <token>`; anything else is anonymous.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(|token| Self::Bearer(token.trim().to_string()))
            .unwrap_or(Self::Anonymous)
    }
}

/// Actions whose permission depends on who is asking.
#[derive(Clone, Debug)]
pub enum Action {
    DeletePost { author: UserId },
    DeleteComment { author: UserId },
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DeletePost { author } => write!(f, "delete-post:{}", author.short_id()),
            Self::DeleteComment { author } => write!(f, "delete-comment:{}", author.short_id()),
        }
    }
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> ServerResult<Identity>;
    async fn authorize(&self, identity: &Identity, action: &Action) -> ServerResult<bool>;
}

/// Bearer-token authentication with the ownership rules of the forum.
///
/// Only a post's author may delete it. Comment deletion is open to any
/// authenticated user; the comment author is not compared.
pub struct TokenAuth<S> {
    accounts: Arc<AuthService<S>>,
}

impl<S> TokenAuth<S> {
    pub fn new(accounts: Arc<AuthService<S>>) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl<S: UserStore + 'static> AuthProvider for TokenAuth<S> {
    async fn authenticate(&self, credentials: &Credentials) -> ServerResult<Identity> {
        match credentials {
            Credentials::Bearer(token) => Ok(self.accounts.authenticate(token)?),
            Credentials::Anonymous => Err(ServerError::Unauthorized("missing bearer token".into())),
        }
    }

    async fn authorize(&self, identity: &Identity, action: &Action) -> ServerResult<bool> {
        Ok(match action {
            Action::DeletePost { author } => identity.id == *author,
            Action::DeleteComment { .. } => true,
        })
    }
}

/// Extractor for handlers that require a signed-in user.
#[derive(Clone, Debug)]
pub struct Authenticated(pub Identity);

#[async_trait]
impl FromRequestParts<AppState> for Authenticated {
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let credentials = Credentials::from_headers(&parts.headers);
        match state.auth.authenticate(&credentials).await {
            Ok(identity) => Ok(Self(identity)),
            Err(err) => {
                tracing::warn!(path = %parts.uri.path(), error = %err, "authentication failed");
                Err(err)
            }
        }
    }
}
