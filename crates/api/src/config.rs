use axum::http::HeaderValue;

use crate::auth::jwt::{JwtConfig, MIN_SECRET_LEN};

/// Origins allowed to make cross-origin requests.
#[derive(Debug, Clone)]
pub enum CorsOrigins {
    /// `*`: any origin, without credentials.
    Any,
    /// An explicit allow-list; credentials are permitted.
    List(Vec<HeaderValue>),
}

/// Why the environment could not be turned into a [`ServerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("JWT_SECRET must be at least {MIN_SECRET_LEN} bytes, got {0}")]
    WeakSecret(usize),
}

/// Server configuration loaded from environment variables.
///
/// Secrets and the connection string are required; startup fails if they are
/// absent. Everything else has a development default.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Upper bound on pooled database connections (default: `20`).
    pub db_max_connections: u32,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT validation settings.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Required | Default   |
    /// |------------------------|----------|-----------|
    /// | `DATABASE_URL`         | **yes**  | --        |
    /// | `JWT_SECRET`           | **yes**  | --        |
    /// | `HOST`                 | no       | `0.0.0.0` |
    /// | `PORT`                 | no       | `8080`    |
    /// | `CORS_ORIGINS`         | no       | `*`       |
    /// | `REQUEST_TIMEOUT_SECS` | no       | `30`      |
    /// | `DB_MAX_CONNECTIONS`   | no       | `20`      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = required(&lookup, "DATABASE_URL")?;

        let secret = required(&lookup, "JWT_SECRET")?;
        if secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::WeakSecret(secret.len()));
        }

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = parsed(&lookup, "PORT", 8080)?;
        let request_timeout_secs: u64 = parsed(&lookup, "REQUEST_TIMEOUT_SECS", 30)?;
        let db_max_connections: u32 = parsed(
            &lookup,
            "DB_MAX_CONNECTIONS",
            catalog_db::DEFAULT_MAX_CONNECTIONS,
        )?;

        let cors_origins =
            parse_cors_origins(&lookup("CORS_ORIGINS").unwrap_or_else(|| "*".into()))?;

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig { secret },
        })
    }
}

fn required<F>(lookup: &F, var: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(var))
}

fn parsed<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => {
            let result = value.trim().parse::<T>();
            result.map_err(|e| ConfigError::Invalid {
                var,
                reason: e.to_string(),
                value,
            })
        }
    }
}

fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if entries.is_empty() || entries.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    entries
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                var: "CORS_ORIGINS",
                value: origin.to_string(),
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}
