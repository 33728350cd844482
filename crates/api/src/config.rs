//! Process configuration, read once at startup.
//!
//! | Env Var                | Default                 |
//! |------------------------|-------------------------|
//! | `DATABASE_URL`         | required                |
//! | `HOST`                 | `0.0.0.0`               |
//! | `PORT`                 | `3000`                  |
//! | `CORS_ORIGINS`         | `http://localhost:5173` |
//! | `REQUEST_TIMEOUT_SECS` | `30`                    |
//! | `DB_MAX_CONNECTIONS`   | `20`                    |
//!
//! JWT settings are read by [`JwtConfig::from_env`]. A malformed value
//! panics with the variable name; the process should not start half-configured.

use std::fmt::Debug;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::auth::jwt::JwtConfig;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    pub db_max_connections: u32,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: required("DATABASE_URL"),
            host: env_or("HOST", "0.0.0.0".to_string()),
            port: env_or("PORT", 3000),
            cors_origins: parse_origins(&env_or(
                "CORS_ORIGINS",
                "http://localhost:5173".to_string(),
            )),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 30),
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 20),
            jwt: JwtConfig::from_env(),
        }
    }

    /// Socket address to listen on.
    ///
    /// # Panics
    ///
    /// Panics if `host` is not an IP address.
    pub fn bind_addr(&self) -> SocketAddr {
        let ip: IpAddr = self
            .host
            .parse()
            .unwrap_or_else(|_| panic!("HOST must be an IP address, got {:?}", self.host));
        SocketAddr::new(ip, self.port)
    }
}

/// Read a non-empty variable or panic naming it.
pub(crate) fn required(key: &str) -> String {
    match std::env::var(key) {
        Ok(v) if !v.is_empty() => v,
        _ => panic!("{key} must be set in the environment"),
    }
}

/// Parse variable `key`, falling back to `default` when it is unset.
pub(crate) fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Debug,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("{key} is malformed ({raw:?}): {e:?}")),
        Err(_) => default,
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
