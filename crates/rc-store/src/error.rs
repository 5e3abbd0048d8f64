use rc_types::{CommentId, PostId};

/// Errors from post store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested post does not exist.
    #[error("post not found: {0}")]
    PostNotFound(PostId),

    /// The post exists but carries no comment with this ID.
    #[error("comment {comment_id} not found on post {post_id}")]
    CommentNotFound {
        post_id: PostId,
        comment_id: CommentId,
    },

    /// The author query matched nothing.
    #[error("no posts by user: {0}")]
    NoPostsByUser(String),

    /// A lock was poisoned by a panicking writer.
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

impl StoreError {
    /// `true` for every "nothing there" outcome. Callers should report these
    /// as an absent resource rather than a fault.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PostNotFound(_) | Self::CommentNotFound { .. } | Self::NoPostsByUser(_)
        )
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
