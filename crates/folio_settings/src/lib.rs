use base64::prelude::*;
use serde::Serialize;
use std::env;
use std::str::FromStr;
use tracing::warn;

pub mod auth;
pub mod database;
pub mod logging;

pub use auth::AuthSettings;
pub use database::DatabaseSettings;
pub use logging::LoggingSettings;

pub const DEFAULT_SERVER_PORT: u16 = 8000;
pub const DEFAULT_MAX_UNPAGINATED_ROWS: i64 = 500;

const DEFAULT_TOKEN_WARNING: &str =
    "Using default api token. This is not recommended for production use.";

/// Reads and parses an environment variable, falling back to `default` when
/// it is unset or unparsable.
pub(crate) fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|_| {
            warn!("Invalid value '{}' for {}, using {}", raw, key, default);
            default
        }),
        Err(_) => default,
    }
}

fn generate_default_token() -> String {
    // Deterministic token for local development only
    let mut key = [0u8; 32];
    for (i, item) in key.iter_mut().enumerate() {
        *item = (i * 7 % 251) as u8;
    }

    BASE64_URL_SAFE_NO_PAD.encode(key)
}

#[derive(Debug, Clone, Serialize)]
pub struct FolioServerConfig {
    pub server_port: u16,
    pub database_settings: DatabaseSettings,
    pub auth_settings: AuthSettings,
    pub logging_settings: LoggingSettings,
    /// Upper bound on rows returned by the unpaginated photo listing.
    pub max_unpaginated_rows: i64,
}

impl Default for FolioServerConfig {
    fn default() -> Self {
        let auth_settings = AuthSettings {
            api_token: env::var("FOLIO_API_TOKEN")
                .ok()
                .filter(|token| !token.trim().is_empty())
                .unwrap_or_else(|| {
                    warn!("{}", DEFAULT_TOKEN_WARNING);
                    generate_default_token()
                }),
        };

        let max_unpaginated_rows =
            env_or("FOLIO_MAX_UNPAGINATED_ROWS", DEFAULT_MAX_UNPAGINATED_ROWS).max(1);

        Self {
            server_port: env_or("FOLIO_SERVER_PORT", DEFAULT_SERVER_PORT),
            database_settings: DatabaseSettings::default(),
            auth_settings,
            logging_settings: LoggingSettings::default(),
            max_unpaginated_rows,
        }
    }
}

impl FolioServerConfig {
    pub fn server_address(&self) -> String {
        format!("0.0.0.0:{}", self.server_port)
    }
}
