use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use rc_auth::Session;

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<AuthRequest>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<TokenResponse>)> {
    let Json(request) = payload?;
    let session = run_blocking(move || {
        state.accounts.register(&request.username, &request.password)
    })
    .await?;
    Ok((StatusCode::CREATED, Json(TokenResponse { token: session.token })))
}

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<AuthRequest>, JsonRejection>,
) -> ServerResult<Json<TokenResponse>> {
    let Json(request) = payload?;
    let session = run_blocking(move || {
        state.accounts.login(&request.username, &request.password)
    })
    .await?;
    Ok(Json(TokenResponse { token: session.token }))
}

/// Password hashing is CPU-bound; keep it off the async workers.
async fn run_blocking<F>(f: F) -> ServerResult<Session>
where
    F: FnOnce() -> rc_auth::AuthResult<Session> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ServerError::Internal(format!("account task failed: {e}")))?
        .map_err(ServerError::from)
}
