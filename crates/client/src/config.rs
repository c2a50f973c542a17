//! # Client Configuration Module
//!
//! Loads the client configuration from environment variables.
//!
//! ## Environment Variables
//!
//! - `API_BASE_URL`: base URL of the backend API (required)
//! - `EDT_TOKEN`: previously stored session token (optional)
//! - `EDT_EMAIL` / `EDT_PASSWORD`: credentials for login (optional)
//! - `LOG_LEVEL`: logging level (default: "info")
//! - `NOTIFICATION_POLL_SECONDS`: notification poll interval (default: 30)

use eyre::{Result, WrapErr};
use std::env;
use std::time::Duration;
use tracing::Level;

/// Configuration for the backend client and the session it opens.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend API (e.g., "http://localhost:3000/api").
    pub base_url: String,

    /// Stored session token, when resuming a previous session.
    pub token: Option<String>,

    /// Login credentials, when opening a fresh session.
    pub email: Option<String>,
    pub password: Option<String>,

    /// Log level for the application.
    pub log_level: Level,

    /// Notification poll interval in seconds.
    pub poll_seconds: u64,
}

impl ClientConfig {
    /// Creates a new ClientConfig from environment variables.
    ///
    /// `API_BASE_URL` is required; everything else has a default or is
    /// optional.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("API_BASE_URL")
            .wrap_err("API_BASE_URL environment variable must be set")?;

        let token = env::var("EDT_TOKEN").ok();
        let email = env::var("EDT_EMAIL").ok();
        let password = env::var("EDT_PASSWORD").ok();

        let log_level = match env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        let poll_seconds = env::var("NOTIFICATION_POLL_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        Ok(Self {
            base_url,
            token,
            email,
            password,
            log_level,
            poll_seconds,
        })
    }

    /// Notification poll interval as a duration.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_seconds)
    }
}
