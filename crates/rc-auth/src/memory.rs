//! In-memory user registry.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{AuthError, AuthResult};
use crate::traits::UserStore;
use crate::user::User;

/// An in-memory implementation of [`UserStore`]. Users are lost when the
/// store is dropped.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn create(&self, username: &str, password_hash: &str) -> AuthResult<User> {
        let mut users = self
            .users
            .write()
            .map_err(|e| AuthError::LockPoisoned(format!("user map: {e}")))?;
        if users.contains_key(username) {
            return Err(AuthError::UserExists(username.to_string()));
        }
        let user = User::new(username, password_hash);
        users.insert(username.to_string(), user.clone());
        Ok(user)
    }

    fn find_by_username(&self, username: &str) -> AuthResult<Option<User>> {
        let users = self
            .users
            .read()
            .map_err(|e| AuthError::LockPoisoned(format!("user map: {e}")))?;
        Ok(users.get(username).cloned())
    }
}
