//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `DIRECTORY_*` environment variables and
//! configuration files. List-valued CORS settings are comma separated.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use uuid::Uuid;

use directory_backend::domain::Actor;
use directory_backend::outbound::persistence::PoolConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_METHODS: &[&str] = &["GET", "POST", "PUT", "DELETE"];
const DEFAULT_ALLOWED_HEADERS: &[&str] = &["Content-Type", "Accept"];
const DEFAULT_EXPOSED_HEADERS: &[&str] = &["Content-Type", "Cache-Control", "Trace-Id"];
const SYSTEM_ACTOR_KIND: &str = "system";

/// Errors raised while interpreting settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The bind address is not a socket address.
    #[error("invalid bind address {value:?}: {message}")]
    BindAddr { value: String, message: String },
    /// The system actor id is not a UUID.
    #[error("invalid system actor id {value:?}: {message}")]
    ActorId { value: String, message: String },
}

/// Cross-origin policy for the HTTP API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsSettings {
    /// Allowed origins; empty or `*` allows any origin.
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub exposed_headers: Vec<String>,
}

impl CorsSettings {
    /// Whether every origin is allowed.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

/// Configuration values controlling the directory server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DIRECTORY")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL; the in-memory store is used when absent.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub pool_timeout_secs: Option<u64>,
    /// Apply pending migrations before serving.
    #[ortho_config(default = true)]
    pub run_migrations: bool,
    /// Comma separated origins allowed by CORS.
    pub cors_allowed_origins: Option<String>,
    /// Comma separated methods allowed by CORS.
    pub cors_allowed_methods: Option<String>,
    /// Comma separated request headers allowed by CORS.
    pub cors_allowed_headers: Option<String>,
    /// Comma separated response headers exposed by CORS.
    pub cors_exposed_headers: Option<String>,
    /// Actor recorded in audit stamps, when set.
    pub system_actor_id: Option<String>,
}

fn split_list(value: Option<&str>, default: &[&str]) -> Vec<String> {
    match value {
        Some(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_owned)
            .collect(),
        None => default.iter().map(|item| (*item).to_owned()).collect(),
    }
}

impl ServerSettings {
    /// Return the configured bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: value.to_owned(),
            message: err.to_string(),
        })
    }

    /// Return pool settings when a database URL is configured.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url.as_deref()?.trim();
        if url.is_empty() {
            return None;
        }
        let mut config = PoolConfig::new(url);
        if let Some(max_size) = self.pool_max_size {
            config = config.with_max_size(max_size);
        }
        if let Some(secs) = self.pool_timeout_secs {
            config = config.with_connection_timeout(Duration::from_secs(secs));
        }
        Some(config)
    }

    /// Return the CORS policy, filling unset lists with defaults.
    pub fn cors(&self) -> CorsSettings {
        CorsSettings {
            allowed_origins: split_list(self.cors_allowed_origins.as_deref(), &[]),
            allowed_methods: split_list(self.cors_allowed_methods.as_deref(), DEFAULT_METHODS),
            allowed_headers: split_list(
                self.cors_allowed_headers.as_deref(),
                DEFAULT_ALLOWED_HEADERS,
            ),
            exposed_headers: split_list(
                self.cors_exposed_headers.as_deref(),
                DEFAULT_EXPOSED_HEADERS,
            ),
        }
    }

    /// Return the system actor used for audit stamps, if configured.
    pub fn system_actor(&self) -> Result<Option<Actor>, SettingsError> {
        let Some(value) = self.system_actor_id.as_deref() else {
            return Ok(None);
        };
        Uuid::parse_str(value.trim())
            .map(|id| Some(Actor::with_kind(id, SYSTEM_ACTOR_KIND)))
            .map_err(|err| SettingsError::ActorId {
                value: value.to_owned(),
                message: err.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 10] = [
        "DIRECTORY_BIND_ADDR",
        "DIRECTORY_DATABASE_URL",
        "DIRECTORY_POOL_MAX_SIZE",
        "DIRECTORY_POOL_TIMEOUT_SECS",
        "DIRECTORY_RUN_MIGRATIONS",
        "DIRECTORY_CORS_ALLOWED_ORIGINS",
        "DIRECTORY_CORS_ALLOWED_METHODS",
        "DIRECTORY_CORS_ALLOWED_HEADERS",
        "DIRECTORY_CORS_EXPOSED_HEADERS",
        "DIRECTORY_SYSTEM_ACTOR_ID",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("directory-backend")])
            .expect("config should load")
    }

    fn cleared_with(overrides: &[(&str, &str)]) -> Vec<(&'static str, Option<String>)> {
        VARS.iter()
            .map(|name| {
                let value = overrides
                    .iter()
                    .find(|(key, _)| key == name)
                    .map(|(_, value)| (*value).to_owned());
                (*name, value)
            })
            .collect()
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(cleared_with(&[]));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default address"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("literal address")
        );
        assert!(settings.pool_config().is_none());
        assert!(settings.run_migrations);
        assert_eq!(settings.system_actor().expect("no actor"), None);

        let cors = settings.cors();
        assert!(cors.allows_any_origin());
        assert_eq!(cors.allowed_methods, ["GET", "POST", "PUT", "DELETE"]);
        assert_eq!(cors.allowed_headers, ["Content-Type", "Accept"]);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let actor_id = "6f9619ff-8b86-d011-b42d-00c04fc964ff";
        let _guard = lock_env(cleared_with(&[
            ("DIRECTORY_BIND_ADDR", "127.0.0.1:9090"),
            ("DIRECTORY_DATABASE_URL", "postgres://localhost/directory"),
            ("DIRECTORY_POOL_MAX_SIZE", "4"),
            ("DIRECTORY_RUN_MIGRATIONS", "false"),
            (
                "DIRECTORY_CORS_ALLOWED_ORIGINS",
                "https://a.example, https://b.example",
            ),
            ("DIRECTORY_SYSTEM_ACTOR_ID", actor_id),
        ]));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("address"),
            "127.0.0.1:9090".parse::<SocketAddr>().expect("literal address")
        );
        let pool = settings.pool_config().expect("pool configured");
        assert_eq!(pool.database_url(), "postgres://localhost/directory");
        assert_eq!(pool.max_size(), 4);
        assert!(!settings.run_migrations);

        let cors = settings.cors();
        assert!(!cors.allows_any_origin());
        assert_eq!(
            cors.allowed_origins,
            ["https://a.example", "https://b.example"]
        );

        let actor = settings
            .system_actor()
            .expect("valid actor")
            .expect("actor configured");
        assert_eq!(actor.id().to_string(), actor_id);
        assert_eq!(actor.kind(), "system");
    }

    #[rstest]
    #[case::bind_addr("DIRECTORY_BIND_ADDR", "not-an-address")]
    #[case::actor("DIRECTORY_SYSTEM_ACTOR_ID", "nobody")]
    fn malformed_values_are_reported(#[case] name: &str, #[case] value: &str) {
        let _guard = lock_env(cleared_with(&[(name, value)]));

        let settings = load_from_empty_args();
        let error = settings
            .bind_addr()
            .err()
            .or_else(|| settings.system_actor().err())
            .expect("one setting is malformed");
        assert!(error.to_string().contains(value));
    }

    #[rstest]
    fn blank_database_url_selects_memory_store() {
        let _guard = lock_env(cleared_with(&[("DIRECTORY_DATABASE_URL", "  ")]));

        assert!(load_from_empty_args().pool_config().is_none());
    }
}
