//! The [`UserStore`] trait defining the user registry interface.

use crate::error::AuthResult;
use crate::user::User;

/// Registry of users keyed by username.
///
/// Implementations must be thread-safe and make `create` atomic: two
/// concurrent registrations of one name must not both succeed.
pub trait UserStore: Send + Sync {
    /// Register a user. Fails with
    /// [`AuthError::UserExists`](crate::AuthError::UserExists) if the name
    /// is taken.
    fn create(&self, username: &str, password_hash: &str) -> AuthResult<User>;

    /// Look a user up by name. Returns `Ok(None)` if unknown.
    fn find_by_username(&self, username: &str) -> AuthResult<Option<User>>;
}
