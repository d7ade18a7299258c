use crate::env_or;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let json = env_or("LOG_JSON", false);

        Self { level, json }
    }
}
