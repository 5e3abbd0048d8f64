//! HTTP server for redditclone.
//!
//! Thin adapter over the post store: resolves the caller's identity from a
//! bearer token, makes one store call per request, and maps the outcome to
//! a status code and JSON body.

pub mod auth;
pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use auth::{Action, AuthProvider, Authenticated, Credentials, TokenAuth};
pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::RedditServer;
pub use state::{Accounts, AppState};
