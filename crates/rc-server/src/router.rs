use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::handler::{self, posts, users};
use crate::state::AppState;

/// Build the axum router with all API endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handler::health_handler))
        .route("/api/register", post(users::register))
        .route("/api/login", post(users::login))
        .route("/api/posts/", get(posts::list_all))
        .route("/api/posts", post(posts::create))
        .route("/api/posts/:category", get(posts::list_category))
        .route(
            "/api/post/:post_id",
            get(posts::show)
                .post(posts::add_comment)
                .delete(posts::delete_post),
        )
        .route("/api/post/:post_id/upvote", get(posts::up_vote))
        .route("/api/post/:post_id/downvote", get(posts::down_vote))
        .route("/api/post/:post_id/unvote", get(posts::un_vote))
        .route(
            "/api/post/:post_id/:comment_id",
            axum::routing::delete(posts::delete_comment),
        )
        .route("/api/user/:login", get(posts::user_posts))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
