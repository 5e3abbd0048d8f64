use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::comment::Comment;
use crate::identity::Identity;
use crate::ids::{PostId, UserId};
use crate::vote::{Vote, VoteDirection};

/// Score assigned to every post at creation. Never recomputed from votes.
pub const INITIAL_SCORE: i64 = 1;

/// Content of a post: exactly one of a text body or an external link.
///
/// Serialized inline in the post with a `type` discriminator, so a text
/// post carries `"type": "text", "text": ...` and never a `url`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PostBody {
    Text {
        #[serde(default)]
        text: String,
    },
    Link {
        #[serde(default)]
        url: String,
    },
}

impl PostBody {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn link(url: impl Into<String>) -> Self {
        Self::Link { url: url.into() }
    }

    /// Wire name of the post type.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Link { .. } => "link",
        }
    }
}

/// A request to create a post, as submitted by a client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub category: String,
    #[serde(flatten)]
    pub body: PostBody,
}

impl NewPost {
    pub fn new(title: impl Into<String>, category: impl Into<String>, body: PostBody) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            body,
        }
    }
}

/// A submitted post together with its votes and comments.
///
/// Values of this type handed out by the store are snapshots: mutating one
/// has no effect on the stored post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub score: i64,
    pub views: u64,
    #[serde(flatten)]
    pub body: PostBody,
    pub title: String,
    pub author: Identity,
    pub category: String,
    pub votes: Vec<Vote>,
    pub comments: Vec<Comment>,
    pub created: DateTime<Utc>,
    #[serde(rename = "upvotePercentage")]
    pub upvote_percentage: u32,
    pub id: PostId,
}

impl Post {
    /// A freshly created post with no votes or comments yet.
    pub fn new(request: NewPost, author: Identity) -> Self {
        Self {
            score: INITIAL_SCORE,
            views: 0,
            body: request.body,
            title: request.title,
            author,
            category: request.category,
            votes: Vec::new(),
            comments: Vec::new(),
            created: Utc::now(),
            upvote_percentage: 100,
            id: PostId::new(),
        }
    }

    /// The direction of `user`'s vote, if they have voted.
    pub fn vote_of(&self, user: &UserId) -> Option<VoteDirection> {
        self.votes.iter().find(|v| v.user == *user).map(|v| v.vote)
    }

    pub fn is_authored_by(&self, user: &UserId) -> bool {
        self.author.id == *user
    }
}
