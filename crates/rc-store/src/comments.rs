//! Comment ledger: append and identity-based removal on a single post.

use rc_types::{Comment, CommentId, Identity, Post};

/// Append a new comment by `author` and return its ID.
pub fn append(post: &mut Post, author: Identity, body: &str) -> CommentId {
    let comment = Comment::new(author, body);
    let id = comment.id;
    post.comments.push(comment);
    id
}

/// Remove the comment with `id`, keeping the others in order.
///
/// Returns `None` when the post has no such comment.
pub fn remove(post: &mut Post, id: &CommentId) -> Option<Comment> {
    let position = post.comments.iter().position(|c| c.id == *id)?;
    Some(post.comments.remove(position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rc_types::{NewPost, PostBody, UserId};

    fn fresh_post() -> Post {
        Post::new(
            NewPost::new("T", "C", PostBody::text("body")),
            Identity::new(UserId::new(), "author"),
        )
    }

    #[test]
    fn append_assigns_fresh_ids() {
        let mut post = fresh_post();
        let commenter = Identity::new(UserId::new(), "bob");
        let a = append(&mut post, commenter.clone(), "first");
        let b = append(&mut post, commenter, "second");
        assert_ne!(a, b);
        assert_eq!(post.comments.len(), 2);
        assert_eq!(post.comments[1].body, "second");
    }

    #[test]
    fn comment_author_is_the_commenter() {
        let mut post = fresh_post();
        let commenter = Identity::new(UserId::new(), "carol");
        append(&mut post, commenter.clone(), "hi");
        assert_eq!(post.comments[0].author, commenter);
        assert_ne!(post.comments[0].author, post.author);
    }

    #[test]
    fn remove_preserves_order() {
        let mut post = fresh_post();
        let who = Identity::new(UserId::new(), "bob");
        let a = append(&mut post, who.clone(), "a");
        let b = append(&mut post, who.clone(), "b");
        let c = append(&mut post, who, "c");

        let removed = remove(&mut post, &b).unwrap();
        assert_eq!(removed.body, "b");
        let ids: Vec<CommentId> = post.comments.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn remove_unknown_is_none() {
        let mut post = fresh_post();
        assert!(remove(&mut post, &CommentId::new()).is_none());
    }
}
