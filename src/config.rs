//! Application configuration management.
//!
//! Configuration is read from environment variables with the `envy` crate,
//! after an optional `.env` file has been loaded by `dotenvy`.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (optional): SQLite connection string, defaults to `sqlite://bank.db`
/// - `SERVER_HOST` (optional): interface to bind, defaults to `127.0.0.1`
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 8000
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default = "default_host")]
    pub server_host: String,

    #[serde(default = "default_port")]
    pub server_port: u16,
}

fn default_database_url() -> String {
    "sqlite://bank.db".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A missing `.env` file is not an error. Field names map to upper-case
    /// variables (`database_url` -> `DATABASE_URL`).
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed,
    /// e.g. a non-numeric `SERVER_PORT`.
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        envy::from_env::<Config>()
    }

    /// Socket address string the HTTP listener binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
