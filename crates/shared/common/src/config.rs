//! Application settings loaded from environment variables.

use std::env;

/// Default listen host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port used when `PORT` is absent or unparsable
pub const DEFAULT_PORT: u16 = 5000;

/// Name greeted on the landing page when `TLNAME` is absent
pub const DEFAULT_DISPLAY_NAME: &str = "friend";

/// SQLite file next to the working directory, created on first use
pub const DEFAULT_DATABASE_URL: &str = "sqlite://blog.db3?mode=rwc";

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Name shown on the landing page
    pub display_name: String,
    /// Database connection URL
    pub database_url: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("display_name", &self.display_name)
            .field("database_url", &"[REDACTED]")
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_port(env::var("PORT").ok().as_deref()),
            display_name: env::var("TLNAME").unwrap_or_else(|_| DEFAULT_DISPLAY_NAME.to_string()),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

fn parse_port(value: Option<&str>) -> u16 {
    value
        .and_then(|p| p.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
