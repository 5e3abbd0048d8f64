//! Vote ledger: per-post votes with at most one entry per user.
//!
//! Casting and changing a vote share one path (remove, then append), so the
//! uniqueness rule is enforced in exactly one place. The upvote percentage
//! is re-derived after every mutation and never carried across calls.

use rc_types::{Post, UserId, Vote, VoteDirection};

/// Remove `user`'s vote from `post`, if any. Returns the removed vote.
fn retract(post: &mut Post, user: &UserId) -> Option<Vote> {
    let position = post.votes.iter().position(|v| v.user == *user)?;
    Some(post.votes.remove(position))
}

/// Replace any existing vote by `user` with a vote in `direction`.
pub fn cast(post: &mut Post, user: UserId, direction: VoteDirection) {
    retract(post, &user);
    post.votes.push(Vote { user, vote: direction });
    recompute(post);
}

/// Withdraw `user`'s vote. A no-op on the votes when none exists, but the
/// percentage is still recomputed.
pub fn clear(post: &mut Post, user: &UserId) {
    retract(post, user);
    recompute(post);
}

/// Refresh the post's cached upvote percentage from its votes.
pub fn recompute(post: &mut Post) {
    post.upvote_percentage = upvote_percentage(&post.votes);
}

/// Share of upvotes in `votes`, floored to an integer in `[0, 100]`.
///
/// No votes, or no upvotes among them, yields 0.
pub fn upvote_percentage(votes: &[Vote]) -> u32 {
    if votes.is_empty() {
        return 0;
    }
    let up = votes.iter().filter(|v| v.vote.is_up()).count();
    if up == 0 {
        return 0;
    }
    (up * 100 / votes.len()) as u32
}
