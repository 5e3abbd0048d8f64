use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::Identity;
use crate::ids::CommentId;

/// A comment attached to a post.
///
/// The author is whoever wrote the comment, which is not necessarily the
/// author of the post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub created: DateTime<Utc>,
    pub author: Identity,
    pub body: String,
    pub id: CommentId,
}

impl Comment {
    /// A fresh comment stamped with the current time.
    pub fn new(author: Identity, body: impl Into<String>) -> Self {
        Self {
            created: Utc::now(),
            author,
            body: body.into(),
            id: CommentId::new(),
        }
    }
}
