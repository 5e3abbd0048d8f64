use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use tracing::info;

use rc_types::{NewPost, Post};

use super::{parse_comment_id, parse_post_id, MessageResponse};
use crate::auth::{Action, Authenticated};
use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub comment: String,
}

pub async fn list_all(State(state): State<AppState>) -> ServerResult<Json<Vec<Post>>> {
    Ok(Json(state.posts.list_all()?))
}

pub async fn create(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
    payload: Result<Json<NewPost>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<Post>)> {
    let Json(request) = payload?;
    let post = state.posts.create(request, &identity)?;
    info!(post_id = %post.id, author = %identity, category = %post.category, "post created");
    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn list_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> ServerResult<Json<Vec<Post>>> {
    Ok(Json(state.posts.get_by_category(&category)?))
}

/// Display a post. Counts as a view.
pub async fn show(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> ServerResult<Json<Post>> {
    let id = parse_post_id(&post_id)?;
    Ok(Json(state.posts.list_by_id(&id)?))
}

pub async fn add_comment(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
    Path(post_id): Path<String>,
    payload: Result<Json<CommentRequest>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<Post>)> {
    let id = parse_post_id(&post_id)?;
    let Json(request) = payload?;
    let post = state.posts.add_comment_to_post(&request.comment, &id, &identity)?;
    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
    Path((post_id, comment_id)): Path<(String, String)>,
) -> ServerResult<Json<Post>> {
    let id = parse_post_id(&post_id)?;
    let comment_id = parse_comment_id(&comment_id)?;

    let post = state.posts.get_by_id(&id)?;
    let comment = post
        .comments
        .iter()
        .find(|c| c.id == comment_id)
        .ok_or_else(|| ServerError::NotFound(format!("comment {comment_id}")))?;
    let action = Action::DeleteComment { author: comment.author.id };
    if !state.auth.authorize(&identity, &action).await? {
        return Err(ServerError::Unauthorized(format!("{identity} may not {action}")));
    }

    Ok(Json(state.posts.delete_comment(&comment_id, &id, &identity.id)?))
}

pub async fn up_vote(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
    Path(post_id): Path<String>,
) -> ServerResult<Json<Post>> {
    let id = parse_post_id(&post_id)?;
    Ok(Json(state.posts.up_vote(&identity.id, &id)?))
}

pub async fn down_vote(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
    Path(post_id): Path<String>,
) -> ServerResult<Json<Post>> {
    let id = parse_post_id(&post_id)?;
    Ok(Json(state.posts.down_vote(&identity.id, &id)?))
}

pub async fn un_vote(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
    Path(post_id): Path<String>,
) -> ServerResult<Json<Post>> {
    let id = parse_post_id(&post_id)?;
    Ok(Json(state.posts.un_vote(&identity.id, &id)?))
}

/// Delete a post. Only its author may do this.
pub async fn delete_post(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
    Path(post_id): Path<String>,
) -> ServerResult<Json<MessageResponse>> {
    let id = parse_post_id(&post_id)?;
    let post = state.posts.get_by_id(&id)?;
    let action = Action::DeletePost { author: post.author.id };
    if !state.auth.authorize(&identity, &action).await? {
        return Err(ServerError::Unauthorized(format!("{identity} may not {action}")));
    }

    state.posts.delete_post(&id)?;
    info!(post_id = %id, author = %identity, "post deleted");
    Ok(Json(MessageResponse {
        message: "success".into(),
    }))
}

pub async fn user_posts(
    State(state): State<AppState>,
    Path(login): Path<String>,
) -> ServerResult<Json<Vec<Post>>> {
    Ok(Json(state.posts.get_all_posts_user(&login)?))
}
