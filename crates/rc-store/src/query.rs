//! Read-only projections over the post collection.

use rc_types::Post;

/// Selects a subset of posts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PostFilter {
    /// Every post.
    All,
    /// Posts in this category (exact, case-sensitive).
    Category(String),
    /// Posts whose author has this username.
    Author(String),
}

impl PostFilter {
    /// Returns `true` if the post belongs to this selection.
    pub fn matches(&self, post: &Post) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => post.category == *category,
            Self::Author(username) => post.author.username == *username,
        }
    }
}
