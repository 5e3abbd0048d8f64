use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

use serde::{Deserialize, Serialize};

use rc_auth::{AuthConfig, DEFAULT_TOKEN_TTL_HOURS};

use crate::error::{ServerError, ServerResult};

/// Server settings, loadable from a TOML file.
///
/// Missing keys take their defaults. The token secret has no default and
/// must come from the file, the command line, or the environment.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub token_ttl_hours: u64,
    #[serde(skip_serializing)]
    pub jwt_secret: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 8032)),
            token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
            jwt_secret: None,
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(s: &str) -> ServerResult<Self> {
        toml::from_str(s).map_err(|e| ServerError::Config(e.to_string()))
    }

    pub fn from_file(path: &Path) -> ServerResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Token-signing settings. Fails when no secret was configured.
    pub fn auth_config(&self) -> ServerResult<AuthConfig> {
        let secret = self
            .jwt_secret
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ServerError::Config("JWT secret is empty".into()))?;
        AuthConfig::new(secret, self.token_ttl_hours)
            .map_err(|e| ServerError::Config(e.to_string()))
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("bind_addr", &self.bind_addr)
            .field("token_ttl_hours", &self.token_ttl_hours)
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
