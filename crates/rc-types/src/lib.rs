//! Foundation types for redditclone.
//!
//! Every other crate in the workspace depends on `rc-types`. The types here
//! are plain data: they carry no locks and perform no I/O. Mutation rules
//! (vote uniqueness, percentage recomputation) live in `rc-store`.
//!
//! # Key Types
//!
//! - [`PostId`], [`CommentId`], [`UserId`] — UUID v7 identifiers
//! - [`Identity`] — the `(id, username)` pair of an authenticated actor
//! - [`Post`] — a submitted post with its votes and comments
//! - [`PostBody`] — closed sum type: text body or external link
//! - [`Vote`] / [`VoteDirection`] — one user's up or down vote
//! - [`Comment`] — a comment owned by a post

pub mod comment;
pub mod error;
pub mod identity;
pub mod ids;
pub mod post;
pub mod vote;

pub use comment::Comment;
pub use error::TypeError;
pub use identity::Identity;
pub use ids::{CommentId, PostId, UserId};
pub use post::{NewPost, Post, PostBody, INITIAL_SCORE};
pub use vote::{Vote, VoteDirection};
