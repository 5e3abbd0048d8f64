use std::sync::Arc;

use rc_auth::{AuthConfig, AuthService, InMemoryUserStore, TokenIssuer};
use rc_store::{InMemoryPostStore, PostStore};

use crate::auth::{AuthProvider, TokenAuth};

/// Account service backed by the in-memory user registry.
pub type Accounts = AuthService<InMemoryUserStore>;

/// Shared handles passed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
    pub accounts: Arc<Accounts>,
    pub auth: Arc<dyn AuthProvider>,
}

impl AppState {
    /// Fresh in-memory stores signing tokens with `auth_config`.
    pub fn in_memory(auth_config: AuthConfig) -> Self {
        let accounts = Arc::new(AuthService::new(
            InMemoryUserStore::new(),
            TokenIssuer::new(auth_config),
        ));
        Self {
            posts: Arc::new(InMemoryPostStore::new()),
            auth: Arc::new(TokenAuth::new(accounts.clone())),
            accounts,
        }
    }
}
