use rc_types::{Identity, UserId};

/// A registered user.
#[derive(Clone)]
pub struct User {
    pub id: UserId,
    pub username: String,
    /// Argon2 PHC string; never the plain password.
    pub password_hash: String,
}

impl User {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    /// The identity this user acts under.
    pub fn identity(&self) -> Identity {
        Identity::new(self.id, self.username.clone())
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
