//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, optionally overridden by
//! command-line flags, and validated before the server starts.
//!
//! ```bash
//! export SERVER_NAME="https://s.example.com"
//! export SECRET="a-long-random-string"
//! export SLUG_LENGTH="5"
//! export HOST="127.0.0.1"
//! export PORT="9997"
//! export STORAGE_FILE="/var/lib/shortener/urls"
//! ```
//!
//! ## Variables
//!
//! - `SERVER_NAME` - Public base URL of the service (default: `http://localhost`)
//! - `SECRET` - Shared secret for submissions (default: `changeme`)
//! - `SLUG_LENGTH` - Characters per generated slug (default: 5, roughly 900
//!   million slugs)
//! - `HOST` - Bind host (default: `localhost`)
//! - `PORT` - Bind port (default: `9997`)
//! - `STORAGE_FILE` - Mapping file, read at startup and rewritten on every
//!   new link (default: `.shortener.urls`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_SERVER_NAME: &str = "http://localhost";
pub const DEFAULT_SECRET: &str = "changeme";
pub const DEFAULT_SLUG_LENGTH: usize = 5;
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 9997;
pub const DEFAULT_STORAGE_FILE: &str = ".shortener.urls";

/// Longest slug length accepted for generated slugs.
const MAX_SLUG_LENGTH: usize = 64;

/// Service configuration.
#[derive(Clone)]
pub struct Config {
    /// Public name including scheme and optional port, e.g. `https://s.example.com`.
    pub server_name: String,
    pub secret: String,
    pub slug_length: usize,
    pub host: String,
    pub port: u16,
    pub storage_file: PathBuf,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_name: DEFAULT_SERVER_NAME.to_string(),
            secret: DEFAULT_SECRET.to_string(),
            slug_length: DEFAULT_SLUG_LENGTH,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            storage_file: PathBuf::from(DEFAULT_STORAGE_FILE),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("server_name", &self.server_name)
            .field("secret", &"***")
            .field("slug_length", &self.slug_length)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("storage_file", &self.storage_file)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparseable values fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let server_name = env::var("SERVER_NAME").unwrap_or(defaults.server_name);
        let secret = env::var("SECRET").unwrap_or(defaults.secret);

        let slug_length = env::var("SLUG_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.slug_length);

        let host = env::var("HOST").unwrap_or(defaults.host);

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.port);

        let storage_file = env::var("STORAGE_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.storage_file);

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Self {
            server_name,
            secret,
            slug_length,
            host,
            port,
            storage_file,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `secret` is empty
    /// - `slug_length` is outside `1..=64`
    /// - `server_name` is not an absolute `http`/`https` URL
    /// - `host` or `storage_file` is empty
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.secret.is_empty() {
            anyhow::bail!("SECRET must not be empty");
        }

        if self.slug_length == 0 || self.slug_length > MAX_SLUG_LENGTH {
            anyhow::bail!(
                "SLUG_LENGTH must be between 1 and {}, got {}",
                MAX_SLUG_LENGTH,
                self.slug_length
            );
        }

        let server_url = Url::parse(&self.server_name)
            .with_context(|| format!("SERVER_NAME is not a valid URL: '{}'", self.server_name))?;
        if !matches!(server_url.scheme(), "http" | "https") {
            anyhow::bail!(
                "SERVER_NAME must start with 'http://' or 'https://', got '{}'",
                self.server_name
            );
        }

        if self.host.is_empty() {
            anyhow::bail!("HOST must not be empty");
        }

        if self.storage_file.as_os_str().is_empty() {
            anyhow::bail!("STORAGE_FILE must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Public base URL without a trailing slash.
    pub fn public_base(&self) -> &str {
        self.server_name.trim_end_matches('/')
    }

    /// `host:port` for logging.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Prints configuration summary (without the secret).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Server name: {}", self.server_name);
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Storage file: {}", self.storage_file.display());
        tracing::info!("  Slug length: {}", self.slug_length);
        tracing::info!("  Secret: {}", mask_secret(&self.secret));
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        if self.secret == DEFAULT_SECRET {
            tracing::warn!("Using the default secret; set SECRET before exposing the service");
        }
    }
}

/// Masks a secret for logging, keeping only its length visible.
///
/// `changeme` → `******** (8 chars)`
fn mask_secret(secret: &str) -> String {
    let len = secret.chars().count();
    format!("{} ({} chars)", "*".repeat(len.min(8)), len)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
