use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// The authenticated actor behind a request.
///
/// Resolved by the session layer from a bearer token and handed to the
/// store as an explicit argument. The store never parses or validates
/// credentials itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub username: String,
}

impl Identity {
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.username, self.id.short_id())
    }
}
