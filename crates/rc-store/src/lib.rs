//! In-memory post repository for redditclone.
//!
//! This crate holds every post together with its votes and comments, and
//! keeps them consistent under concurrent access.
//!
//! # Components
//!
//! - [`PostStore`] — the repository interface consumed by the HTTP layer
//! - [`InMemoryPostStore`] — `RwLock`-guarded map with one lock per post
//! - [`votes`] — vote ledger: one vote per user, percentage recomputation
//! - [`comments`] — comment ledger: append and removal by ID
//! - [`query`] — category and author filters
//!
//! # Rules
//!
//! 1. A post holds at most one vote per user.
//! 2. The upvote percentage is recomputed inside every vote mutation.
//! 3. Creating a post casts the author's own upvote.
//! 4. Only [`PostStore::list_by_id`] changes the view count.
//! 5. The store performs no authorization; callers check ownership.
//! 6. Callers receive snapshots, never references into the store.

pub mod comments;
pub mod error;
pub mod memory;
pub mod query;
pub mod traits;
pub mod votes;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryPostStore;
pub use query::PostFilter;
pub use traits::PostStore;
