/**
 * Server Configuration
 *
 * Settings are read from environment variables (a `.env` file is loaded by
 * the binaries first). Everything has a development default so the server
 * starts with no configuration at all.
 *
 * | Variable          | Default                                   |
 * |-------------------|-------------------------------------------|
 * | `DATABASE_URL`    | unset: in-memory user store               |
 * | `JWT_SECRET`      | development fallback secret               |
 * | `PORT`            | 3000                                      |
 * | `DATA_DIR`        | `public/data`                             |
 * | `ALLOWED_ORIGINS` | local static-server and self origins      |
 * | `WRITE_POLICY`    | `allow-all`                               |
 * | `BCRYPT_COST`     | 10                                        |
 *
 * # Error Handling
 *
 * An unparsable `PORT` falls back to the default with a warning. An unknown
 * `WRITE_POLICY` or out-of-range `BCRYPT_COST` is a `ConfigError`: those
 * change security behavior and should not be guessed.
 */

use std::path::PathBuf;
use thiserror::Error;

use crate::backend::auth::users::UserStore;
use crate::backend::error::StoreError;
use crate::backend::middleware::AuthorizationPolicy;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATA_DIR: &str = "public/data";
pub const DEFAULT_BCRYPT_COST: u32 = 10;
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "http://127.0.0.1:5500",
    "http://localhost:5500",
    "http://localhost:3000",
];

/// Secret used when `JWT_SECRET` is unset. Development only.
const DEV_JWT_SECRET: &str = "echo-frontier-dev-secret";

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}='{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub allowed_origins: Vec<String>,
    pub write_policy: AuthorizationPolicy,
    pub bcrypt_cost: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            port: DEFAULT_PORT,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
            write_policy: AuthorizationPolicy::default(),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl ServerConfig {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        config.database_url = get("DATABASE_URL");

        match get("JWT_SECRET") {
            Some(secret) => config.jwt_secret = secret,
            None => tracing::warn!("JWT_SECRET not set. Using the development secret; do not deploy like this."),
        }

        if let Some(port) = get("PORT") {
            match port.parse::<u16>() {
                Ok(port) => config.port = port,
                Err(_) => tracing::warn!("PORT='{}' is not a valid port, using {}", port, DEFAULT_PORT),
            }
        }

        if let Some(dir) = get("DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(origins) = get("ALLOWED_ORIGINS") {
            config.allowed_origins = origins
                .split(',')
                .map(|o| o.trim().trim_end_matches('/').to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }

        if let Some(policy) = get("WRITE_POLICY") {
            config.write_policy = policy.parse().map_err(|reason| ConfigError::Invalid {
                key: "WRITE_POLICY",
                value: policy.clone(),
                reason,
            })?;
        }

        if let Some(cost) = get("BCRYPT_COST") {
            config.bcrypt_cost = match cost.parse::<u32>() {
                Ok(c) if (4..=31).contains(&c) => c,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "BCRYPT_COST",
                        value: cost,
                        reason: "expected an integer between 4 and 31".to_string(),
                    })
                }
            };
        }

        Ok(config)
    }
}

/// Open the user store the configuration asks for
///
/// With `DATABASE_URL` set the connection must succeed; without it the
/// server runs on an empty in-memory store.
pub async fn load_user_store(config: &ServerConfig) -> Result<UserStore, StoreError> {
    match &config.database_url {
        Some(url) => {
            tracing::info!("Connecting to database...");
            let store = UserStore::connect(url).await?;
            tracing::info!("Database connection pool created successfully");
            Ok(store)
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Users are kept in memory and lost on restart.");
            Ok(UserStore::in_memory())
        }
    }
}
