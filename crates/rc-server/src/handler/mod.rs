//! Request handlers. Each one resolves identity where needed, makes one
//! call into the post store or account service, and serializes the result.

pub mod posts;
pub mod users;

use axum::response::Json;
use serde::Serialize;
use serde_json::json;

use rc_types::{CommentId, PostId};

use crate::error::{ServerError, ServerResult};

/// Health check handler.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "name": "redditclone",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// An unparseable ID cannot name an existing post.
fn parse_post_id(raw: &str) -> ServerResult<PostId> {
    raw.parse()
        .map_err(|_| ServerError::NotFound(format!("post {raw}")))
}

fn parse_comment_id(raw: &str) -> ServerResult<CommentId> {
    raw.parse()
        .map_err(|_| ServerError::NotFound(format!("comment {raw}")))
}
