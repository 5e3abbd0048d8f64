//! Identity provider for redditclone.
//!
//! Issues the `(id, username)` identities that the post store accepts. The
//! store itself never sees credentials or tokens.
//!
//! # Modules
//!
//! - [`config`] — [`AuthConfig`]: signing secret and token lifetime
//! - [`password`] — Argon2id hashing
//! - [`token`] — [`TokenIssuer`]: HS256 JWT issue/verify
//! - [`traits`] / [`memory`] — [`UserStore`] and its in-memory registry
//! - [`service`] — [`AuthService`]: register, login, authenticate

pub mod config;
pub mod error;
pub mod memory;
pub mod password;
pub mod service;
pub mod token;
pub mod traits;
pub mod user;

pub use config::{AuthConfig, DEFAULT_TOKEN_TTL_HOURS};
pub use error::{AuthError, AuthResult};
pub use memory::InMemoryUserStore;
pub use service::{AuthService, Session};
pub use token::{Claims, TokenIssuer};
pub use traits::UserStore;
pub use user::User;
