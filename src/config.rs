//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Every variable has a default, so a bare `cargo run` serves on
//! port 5000 with `urls.db` in the working directory.
//!
//! ## Database location
//!
//! ```bash
//! export DATABASE_URL="sqlite://data/urls.db"   # full URL, takes priority
//! export DB_PATH="data/urls.db"                 # or just a file path
//! ```
//!
//! ## Variables
//!
//! - `BASE_URL` - Public prefix of short links (default: `http://localhost:5000`)
//! - `DATABASE_URL` / `DB_PATH` - SQLite database (default: `sqlite://urls.db`)
//! - `HOST` - Bind host (default: `0.0.0.0`)
//! - `PORT` - Bind port (default: `5000`)
//! - `DEBUG` - `1`/`true` enables debug mode (default: off)
//! - `RUST_LOG` - Log filter (default: `info`, or `debug` in debug mode)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)

use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prefix used to build shareable short links, without trailing slash.
    pub base_url: String,
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Debug mode lowers the default log level to `debug`.
    pub debug: bool,
    pub log_level: String,
    pub log_format: String,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT`, `DB_MAX_CONNECTIONS` or `DB_CONNECT_TIMEOUT`
    /// is set but is not a valid number.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("BASE_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string())
            .trim_end_matches('/')
            .to_string();

        let database_url = Self::load_database_url();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_var("PORT", 5000)?;

        let debug = env::var("DEBUG")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let default_level = if debug { "debug" } else { "info" };
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = parse_var("DB_MAX_CONNECTIONS", 5)?;
        let db_connect_timeout = parse_var("DB_CONNECT_TIMEOUT", 30)?;

        Ok(Self {
            base_url,
            database_url,
            host,
            port,
            debug,
            log_level,
            log_format,
            db_max_connections,
            db_connect_timeout,
        })
    }

    /// Loads the database URL.
    ///
    /// Priority:
    /// 1. `DATABASE_URL` environment variable
    /// 2. `sqlite://{DB_PATH}`, with `DB_PATH` defaulting to `urls.db`
    fn load_database_url() -> String {
        if let Ok(url) = env::var("DATABASE_URL") {
            return url;
        }

        let path = env::var("DB_PATH").unwrap_or_else(|_| "urls.db".to_string());
        format!("sqlite://{}", path)
    }

    /// Socket address string the server binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `base_url` is not an absolute http(s) URL
    /// - `database_url` is not a SQLite URL
    /// - `port` is 0
    /// - `log_format` is not `text` or `json`
    /// - pool settings are zero
    pub fn validate(&self) -> Result<()> {
        let base = Url::parse(&self.base_url)
            .with_context(|| format!("BASE_URL must be a valid URL, got '{}'", self.base_url))?;
        if !matches!(base.scheme(), "http" | "https") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.port == 0 {
            anyhow::bail!("PORT must be between 1 and 65535");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Debug mode: {}", self.debug);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Parses a numeric variable, using `default` when it is unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(v) => v
            .parse()
            .with_context(|| format!("{name} must be a number, got '{v}'")),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
