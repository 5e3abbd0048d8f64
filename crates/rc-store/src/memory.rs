//! In-memory post store.
//!
//! [`InMemoryPostStore`] keeps every post in a `HashMap` behind a `RwLock`.
//! The map lock only guards membership: inserting, removing, looking up, and
//! iterating. Each post sits behind its own `Mutex`, so mutations on
//! different posts never wait on each other while two mutations on the same
//! post are serialized.
//!
//! Lock order is always map, then post. A single-post mutation clones the
//! post's `Arc` and drops the map lock before locking the post.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use tracing::debug;

use rc_types::{CommentId, Identity, NewPost, Post, PostId, UserId, VoteDirection};

use crate::comments;
use crate::error::{StoreError, StoreResult};
use crate::query::PostFilter;
use crate::traits::PostStore;
use crate::votes;

type Slot = Arc<Mutex<Post>>;

/// An in-memory implementation of [`PostStore`].
///
/// Data lives for as long as the store does; nothing is persisted.
#[derive(Debug, Default)]
pub struct InMemoryPostStore {
    posts: RwLock<HashMap<PostId, Slot>>,
}

impl InMemoryPostStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of posts currently stored.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read_map()?.len())
    }

    /// Returns `true` if the store holds no posts.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    fn read_map(
        &self,
    ) -> StoreResult<std::sync::RwLockReadGuard<'_, HashMap<PostId, Slot>>> {
        self.posts
            .read()
            .map_err(|e| StoreError::LockPoisoned(format!("post map: {e}")))
    }

    fn write_map(
        &self,
    ) -> StoreResult<std::sync::RwLockWriteGuard<'_, HashMap<PostId, Slot>>> {
        self.posts
            .write()
            .map_err(|e| StoreError::LockPoisoned(format!("post map: {e}")))
    }

    fn slot(&self, id: &PostId) -> StoreResult<Slot> {
        self.read_map()?
            .get(id)
            .cloned()
            .ok_or(StoreError::PostNotFound(*id))
    }

    /// Run `f` against one post while holding that post's lock, then hand
    /// back a snapshot of the result.
    fn with_post<F>(&self, id: &PostId, f: F) -> StoreResult<Post>
    where
        F: FnOnce(&mut Post) -> StoreResult<()>,
    {
        let slot = self.slot(id)?;
        let mut post = slot
            .lock()
            .map_err(|e| StoreError::LockPoisoned(format!("post {id}: {e}")))?;
        f(&mut post)?;
        Ok(post.clone())
    }
}

impl PostStore for InMemoryPostStore {
    fn create(&self, request: NewPost, author: &Identity) -> StoreResult<Post> {
        let mut post = Post::new(request, author.clone());
        // The self-upvote lands before the post becomes visible.
        votes::cast(&mut post, author.id, VoteDirection::Up);

        let id = post.id;
        let snapshot = post.clone();
        self.write_map()?.insert(id, Arc::new(Mutex::new(post)));
        debug!(post_id = %id, author = %author, kind = snapshot.body.kind(), "post created");
        Ok(snapshot)
    }

    fn get_by_id(&self, id: &PostId) -> StoreResult<Post> {
        let slot = self.slot(id)?;
        let post = slot
            .lock()
            .map_err(|e| StoreError::LockPoisoned(format!("post {id}: {e}")))?;
        Ok(post.clone())
    }

    fn list_by_id(&self, id: &PostId) -> StoreResult<Post> {
        self.with_post(id, |post| {
            post.views += 1;
            Ok(())
        })
    }

    fn select(&self, filter: &PostFilter) -> StoreResult<Vec<Post>> {
        let map = self.read_map()?;
        let mut result = Vec::new();
        for (id, slot) in map.iter() {
            let post = slot
                .lock()
                .map_err(|e| StoreError::LockPoisoned(format!("post {id}: {e}")))?;
            if filter.matches(&post) {
                result.push(post.clone());
            }
        }
        debug!(?filter, matched = result.len(), total = map.len(), "posts selected");
        Ok(result)
    }

    fn delete_post(&self, id: &PostId) -> StoreResult<()> {
        self.write_map()?
            .remove(id)
            .ok_or(StoreError::PostNotFound(*id))?;
        debug!(post_id = %id, "post deleted");
        Ok(())
    }

    fn vote(&self, user: &UserId, post: &PostId, direction: VoteDirection) -> StoreResult<Post> {
        let updated = self.with_post(post, |p| {
            votes::cast(p, *user, direction);
            Ok(())
        })?;
        debug!(
            post_id = %post,
            user = %user,
            vote = direction.value(),
            upvote_percentage = updated.upvote_percentage,
            "vote cast"
        );
        Ok(updated)
    }

    fn un_vote(&self, user: &UserId, post: &PostId) -> StoreResult<Post> {
        let updated = self.with_post(post, |p| {
            votes::clear(p, user);
            Ok(())
        })?;
        debug!(post_id = %post, user = %user, "vote withdrawn");
        Ok(updated)
    }

    fn add_comment_to_post(
        &self,
        body: &str,
        post: &PostId,
        author: &Identity,
    ) -> StoreResult<Post> {
        let mut comment_id = None;
        let updated = self.with_post(post, |p| {
            comment_id = Some(comments::append(p, author.clone(), body));
            Ok(())
        })?;
        if let Some(comment_id) = comment_id {
            debug!(post_id = %post, %comment_id, author = %author, "comment added");
        }
        Ok(updated)
    }

    fn delete_comment(
        &self,
        comment: &CommentId,
        post: &PostId,
        requester: &UserId,
    ) -> StoreResult<Post> {
        let updated = self.with_post(post, |p| {
            comments::remove(p, comment)
                .map(|_| ())
                .ok_or(StoreError::CommentNotFound {
                    post_id: *post,
                    comment_id: *comment,
                })
        })?;
        debug!(post_id = %post, comment_id = %comment, requester = %requester, "comment deleted");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rc_types::{PostBody, Vote, INITIAL_SCORE};

    fn user(name: &str) -> Identity {
        Identity::new(UserId::new(), name)
    }

    fn text_post(title: &str, category: &str) -> NewPost {
        NewPost::new(title, category, PostBody::text("body"))
    }

    // ---- Creation ----

    #[test]
    fn create_casts_self_upvote() {
        let store = InMemoryPostStore::new();
        let alice = user("alice");
        let post = store.create(text_post("T", "C"), &alice).unwrap();

        assert_eq!(post.votes, vec![Vote::up(alice.id)]);
        assert_eq!(post.upvote_percentage, 100);
        assert_eq!(post.score, INITIAL_SCORE);
        assert_eq!(post.views, 0);
        assert!(post.comments.is_empty());
        assert_eq!(post.author, alice);
    }

    #[test]
    fn create_assigns_unique_ids() {
        let store = InMemoryPostStore::new();
        let alice = user("alice");
        let a = store.create(text_post("a", "C"), &alice).unwrap();
        let b = store.create(text_post("b", "C"), &alice).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn link_post_keeps_url() {
        let store = InMemoryPostStore::new();
        let request = NewPost::new("T", "news", PostBody::link("https://example.com"));
        let post = store.create(request, &user("alice")).unwrap();
        assert_eq!(post.body, PostBody::link("https://example.com"));
    }

    // ---- Lookup and views ----

    #[test]
    fn get_by_id_does_not_count_views() {
        let store = InMemoryPostStore::new();
        let post = store.create(text_post("T", "C"), &user("alice")).unwrap();
        store.get_by_id(&post.id).unwrap();
        store.get_by_id(&post.id).unwrap();
        assert_eq!(store.get_by_id(&post.id).unwrap().views, 0);
    }

    #[test]
    fn list_by_id_counts_views() {
        let store = InMemoryPostStore::new();
        let post = store.create(text_post("T", "C"), &user("alice")).unwrap();
        assert_eq!(store.list_by_id(&post.id).unwrap().views, 1);
        assert_eq!(store.list_by_id(&post.id).unwrap().views, 2);
        assert_eq!(store.get_by_id(&post.id).unwrap().views, 2);
    }

    #[test]
    fn missing_post_is_not_found() {
        let store = InMemoryPostStore::new();
        let id = PostId::new();
        assert!(matches!(store.get_by_id(&id), Err(StoreError::PostNotFound(x)) if x == id));
        assert!(store.list_by_id(&id).unwrap_err().is_not_found());
        assert!(store.up_vote(&UserId::new(), &id).unwrap_err().is_not_found());
        assert!(store
            .add_comment_to_post("hi", &id, &user("bob"))
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn snapshots_are_detached() {
        let store = InMemoryPostStore::new();
        let mut post = store.create(text_post("T", "C"), &user("alice")).unwrap();
        post.title = "changed".into();
        post.votes.clear();
        let stored = store.get_by_id(&post.id).unwrap();
        assert_eq!(stored.title, "T");
        assert_eq!(stored.votes.len(), 1);
    }

    // ---- Queries ----

    #[test]
    fn list_all_returns_every_post() {
        let store = InMemoryPostStore::new();
        assert!(store.list_all().unwrap().is_empty());
        let alice = user("alice");
        store.create(text_post("a", "music"), &alice).unwrap();
        store.create(text_post("b", "news"), &alice).unwrap();
        assert_eq!(store.list_all().unwrap().len(), 2);
    }

    #[test]
    fn category_filter() {
        let store = InMemoryPostStore::new();
        let alice = user("alice");
        store.create(text_post("a", "music"), &alice).unwrap();
        store.create(text_post("b", "news"), &alice).unwrap();
        store.create(text_post("c", "music"), &alice).unwrap();

        let music = store.get_by_category("music").unwrap();
        assert_eq!(music.len(), 2);
        assert!(music.iter().all(|p| p.category == "music"));
        assert!(store.get_by_category("Music").unwrap().is_empty());
    }

    #[test]
    fn author_filter() {
        let store = InMemoryPostStore::new();
        let (alice, bob) = (user("alice"), user("bob"));
        store.create(text_post("a", "C"), &alice).unwrap();
        store.create(text_post("b", "C"), &bob).unwrap();
        store.create(text_post("c", "C"), &alice).unwrap();

        let posts = store.get_all_posts_user("alice").unwrap();
        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| p.author == alice));
    }

    #[test]
    fn author_filter_with_no_posts_is_not_found() {
        let store = InMemoryPostStore::new();
        store.create(text_post("a", "C"), &user("alice")).unwrap();
        let err = store.get_all_posts_user("nobody").unwrap_err();
        assert!(matches!(err, StoreError::NoPostsByUser(ref u) if u == "nobody"));
        assert!(err.is_not_found());
    }

    // ---- Deletion ----

    #[test]
    fn delete_post_removes_it() {
        let store = InMemoryPostStore::new();
        let alice = user("alice");
        let post = store.create(text_post("T", "C"), &alice).unwrap();
        store.add_comment_to_post("hi", &post.id, &alice).unwrap();

        store.delete_post(&post.id).unwrap();
        assert!(store.get_by_id(&post.id).unwrap_err().is_not_found());
        assert!(store.is_empty().unwrap());
        assert!(store.delete_post(&post.id).unwrap_err().is_not_found());
    }

    // ---- Votes ----

    #[test]
    fn voting_scenario() {
        let store = InMemoryPostStore::new();
        let (u1, u2) = (user("u1"), user("u2"));
        let post = store
            .create(NewPost::new("T", "C", PostBody::text("body")), &u1)
            .unwrap();
        assert_eq!(post.votes, vec![Vote::up(u1.id)]);
        assert_eq!(post.upvote_percentage, 100);
        assert_eq!(post.score, 1);

        let post = store.down_vote(&u2.id, &post.id).unwrap();
        assert_eq!(post.votes.len(), 2);
        assert_eq!(post.upvote_percentage, 50);

        let post = store.up_vote(&u1.id, &post.id).unwrap();
        assert_eq!(post.votes.len(), 2);
        assert_eq!(post.upvote_percentage, 50);
    }

    #[test]
    fn score_is_not_derived_from_votes() {
        let store = InMemoryPostStore::new();
        let alice = user("alice");
        let post = store.create(text_post("T", "C"), &alice).unwrap();
        store.down_vote(&UserId::new(), &post.id).unwrap();
        let post = store.down_vote(&alice.id, &post.id).unwrap();
        assert_eq!(post.upvote_percentage, 0);
        assert_eq!(post.score, INITIAL_SCORE);
    }

    #[test]
    fn un_vote_removes_only_the_callers_vote() {
        let store = InMemoryPostStore::new();
        let (alice, bob) = (user("alice"), user("bob"));
        let post = store.create(text_post("T", "C"), &alice).unwrap();
        store.down_vote(&bob.id, &post.id).unwrap();

        let post = store.un_vote(&alice.id, &post.id).unwrap();
        assert_eq!(post.votes, vec![Vote::down(bob.id)]);
        assert_eq!(post.upvote_percentage, 0);

        let post = store.un_vote(&bob.id, &post.id).unwrap();
        assert!(post.votes.is_empty());
        assert_eq!(post.upvote_percentage, 0);
    }

    #[test]
    fn un_vote_without_vote_is_noop() {
        let store = InMemoryPostStore::new();
        let alice = user("alice");
        let post = store.create(text_post("T", "C"), &alice).unwrap();
        let after = store.un_vote(&UserId::new(), &post.id).unwrap();
        assert_eq!(after.votes, post.votes);
        assert_eq!(after.upvote_percentage, 100);
    }

    // ---- Comments ----

    #[test]
    fn add_comment_appends_one() {
        let store = InMemoryPostStore::new();
        let (alice, bob) = (user("alice"), user("bob"));
        let post = store.create(text_post("T", "C"), &alice).unwrap();

        let first = store.add_comment_to_post("one", &post.id, &bob).unwrap();
        assert_eq!(first.comments.len(), 1);
        assert_eq!(first.comments[0].author, bob);
        assert_eq!(first.comments[0].body, "one");

        let second = store.add_comment_to_post("two", &post.id, &alice).unwrap();
        assert_eq!(second.comments.len(), 2);
        assert_ne!(second.comments[0].id, second.comments[1].id);
    }

    #[test]
    fn delete_comment_removes_exactly_one() {
        let store = InMemoryPostStore::new();
        let alice = user("alice");
        let post = store.create(text_post("T", "C"), &alice).unwrap();
        store.add_comment_to_post("a", &post.id, &alice).unwrap();
        let post = store.add_comment_to_post("b", &post.id, &alice).unwrap();
        let target = post.comments[0].id;

        let post = store.delete_comment(&target, &post.id, &alice.id).unwrap();
        assert_eq!(post.comments.len(), 1);
        assert!(post.comments.iter().all(|c| c.id != target));

        let err = store.delete_comment(&target, &post.id, &alice.id).unwrap_err();
        assert!(matches!(err, StoreError::CommentNotFound { .. }));
    }

    #[test]
    fn delete_comment_on_missing_post() {
        let store = InMemoryPostStore::new();
        let err = store
            .delete_comment(&CommentId::new(), &PostId::new(), &UserId::new())
            .unwrap_err();
        assert!(matches!(err, StoreError::PostNotFound(_)));
    }

    #[test]
    fn any_requester_may_delete_a_comment() {
        // Comment deletion is permissive: the requester is not checked
        // against the comment author.
        let store = InMemoryPostStore::new();
        let (alice, mallory) = (user("alice"), user("mallory"));
        let post = store.create(text_post("T", "C"), &alice).unwrap();
        let post = store.add_comment_to_post("mine", &post.id, &alice).unwrap();
        let comment = post.comments[0].id;

        let post = store.delete_comment(&comment, &post.id, &mallory.id).unwrap();
        assert!(post.comments.is_empty());
    }

    // ---- Concurrency ----

    #[test]
    fn concurrent_views_are_not_lost() {
        let store = InMemoryPostStore::new();
        let post = store.create(text_post("T", "C"), &user("alice")).unwrap();

        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..250 {
                        store.list_by_id(&post.id).unwrap();
                    }
                });
            }
            s.spawn(|| {
                for _ in 0..100 {
                    store.up_vote(&UserId::new(), &post.id).unwrap();
                    store.list_all().unwrap();
                }
            });
        });

        assert_eq!(store.get_by_id(&post.id).unwrap().views, 2000);
    }

    #[test]
    fn concurrent_votes_by_one_user_stay_unique() {
        let store = InMemoryPostStore::new();
        let alice = user("alice");
        let post = store.create(text_post("T", "C"), &alice).unwrap();
        let bob = UserId::new();

        std::thread::scope(|s| {
            for i in 0..8 {
                let store = &store;
                let id = post.id;
                s.spawn(move || {
                    for j in 0..200 {
                        match (i + j) % 3 {
                            0 => store.up_vote(&bob, &id).unwrap(),
                            1 => store.down_vote(&bob, &id).unwrap(),
                            _ => store.un_vote(&bob, &id).unwrap(),
                        };
                    }
                });
            }
        });

        let post = store.get_by_id(&post.id).unwrap();
        assert!(post.votes.iter().filter(|v| v.user == bob).count() <= 1);
        assert_eq!(post.upvote_percentage, votes::upvote_percentage(&post.votes));
    }

    #[test]
    fn concurrent_comments_are_all_kept() {
        let store = InMemoryPostStore::new();
        let alice = user("alice");
        let post = store.create(text_post("T", "C"), &alice).unwrap();

        std::thread::scope(|s| {
            for t in 0..4 {
                let store = &store;
                let commenter = user(&format!("user{t}"));
                let id = post.id;
                s.spawn(move || {
                    for n in 0..50 {
                        store
                            .add_comment_to_post(&format!("{t}-{n}"), &id, &commenter)
                            .unwrap();
                    }
                });
            }
        });

        let post = store.get_by_id(&post.id).unwrap();
        assert_eq!(post.comments.len(), 200);
        let mut ids: Vec<CommentId> = post.comments.iter().map(|c| c.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 200);
    }
}
