//! The [`PostStore`] trait defining the post repository interface.

use rc_types::{CommentId, Identity, NewPost, Post, PostId, UserId, VoteDirection};

use crate::error::{StoreError, StoreResult};
use crate::query::PostFilter;

/// Storage backend for posts, their votes, and their comments.
///
/// Implementations must be thread-safe (`Send + Sync`); every method may be
/// called concurrently. Returned posts are snapshots taken while the post
/// was protected, never live references into the store.
///
/// None of the methods perform authorization. The caller decides who may
/// delete a post or a comment before calling in.
pub trait PostStore: Send + Sync {
    /// Store a new post by `author` and cast the author's own upvote on it.
    fn create(&self, request: NewPost, author: &Identity) -> StoreResult<Post>;

    /// Look up a post without touching its view count.
    fn get_by_id(&self, id: &PostId) -> StoreResult<Post>;

    /// Look up a post for display, incrementing its view count by one.
    fn list_by_id(&self, id: &PostId) -> StoreResult<Post>;

    /// Snapshot of the posts matching `filter`, in unspecified order.
    fn select(&self, filter: &PostFilter) -> StoreResult<Vec<Post>>;

    /// Remove a post along with its votes and comments.
    fn delete_post(&self, id: &PostId) -> StoreResult<()>;

    /// Set `user`'s vote on a post, replacing any earlier vote.
    fn vote(&self, user: &UserId, post: &PostId, direction: VoteDirection) -> StoreResult<Post>;

    /// Withdraw `user`'s vote on a post. Succeeds even if they had none.
    fn un_vote(&self, user: &UserId, post: &PostId) -> StoreResult<Post>;

    /// Append a comment by `author` and return the updated post.
    fn add_comment_to_post(&self, body: &str, post: &PostId, author: &Identity)
        -> StoreResult<Post>;

    /// Remove a comment by ID and return the updated post.
    ///
    /// `requester` is accepted for auditing only: any requester may delete
    /// any comment.
    fn delete_comment(
        &self,
        comment: &CommentId,
        post: &PostId,
        requester: &UserId,
    ) -> StoreResult<Post>;

    /// Snapshot of every post.
    fn list_all(&self) -> StoreResult<Vec<Post>> {
        self.select(&PostFilter::All)
    }

    /// All posts in `category`. May be empty.
    fn get_by_category(&self, category: &str) -> StoreResult<Vec<Post>> {
        self.select(&PostFilter::Category(category.to_string()))
    }

    /// All posts by the user named `username`.
    ///
    /// Fails with [`StoreError::NoPostsByUser`] rather than returning an
    /// empty list.
    fn get_all_posts_user(&self, username: &str) -> StoreResult<Vec<Post>> {
        let posts = self.select(&PostFilter::Author(username.to_string()))?;
        if posts.is_empty() {
            return Err(StoreError::NoPostsByUser(username.to_string()));
        }
        Ok(posts)
    }

    fn up_vote(&self, user: &UserId, post: &PostId) -> StoreResult<Post> {
        self.vote(user, post, VoteDirection::Up)
    }

    fn down_vote(&self, user: &UserId, post: &PostId) -> StoreResult<Post> {
        self.vote(user, post, VoteDirection::Down)
    }
}
