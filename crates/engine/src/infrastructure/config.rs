//! Server configuration read from the environment.

use std::path::Path;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// SQLite file for the player store. `None` keeps players in memory.
    pub player_db: Option<String>,
    /// `*` or a comma-separated origin list. `None` disables CORS.
    pub cors_allowed_origins: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = var("SERVER_PORT")
            .or_else(|| var("PORT"))
            .and_then(|value| match value.parse() {
                Ok(port) => Some(port),
                Err(_) => {
                    tracing::warn!(value = %value, "Ignoring unparsable port, using default");
                    None
                }
            })
            .unwrap_or(DEFAULT_PORT);

        Self {
            host: var("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            player_db: var("PLAYER_DB"),
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS"),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load `.env.local` then `.env` from the repository root.
///
/// Values already set are never overridden, so `.env.local` wins.
pub fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

pub fn build_cors_layer(config: &ServerConfig) -> Option<CorsLayer> {
    let allowed_origins = config.cors_allowed_origins.as_deref()?;

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if allowed_origins == "*" {
        return Some(cors.allow_origin(Any));
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();
    if origins.is_empty() {
        return None;
    }
    Some(cors.allow_origin(origins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config(&[]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert!(config.player_db.is_none());
        assert!(config.cors_allowed_origins.is_none());
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn server_port_takes_precedence_over_port() {
        assert_eq!(config(&[("SERVER_PORT", "8080"), ("PORT", "9090")]).port, 8080);
        assert_eq!(config(&[("PORT", "9090")]).port, 9090);
    }

    #[test]
    fn bad_port_falls_back_to_default() {
        assert_eq!(config(&[("SERVER_PORT", "eighty")]).port, 3000);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config(&[("PLAYER_DB", "  "), ("CORS_ALLOWED_ORIGINS", "")]);
        assert!(config.player_db.is_none());
        assert!(build_cors_layer(&config).is_none());
    }

    #[test]
    fn cors_layer_built_for_wildcard_and_lists() {
        assert!(build_cors_layer(&config(&[("CORS_ALLOWED_ORIGINS", "*")])).is_some());
        assert!(build_cors_layer(&config(&[(
            "CORS_ALLOWED_ORIGINS",
            "http://localhost:5173, https://roster.example"
        )]))
        .is_some());
        assert!(build_cors_layer(&config(&[("CORS_ALLOWED_ORIGINS", " , ")])).is_none());
    }
}
