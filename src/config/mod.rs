//! Configuration module for the admin content client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the content API (no trailing slash)
    pub api_base_url: String,
    /// Endpoint receiving multipart image uploads
    pub upload_endpoint: Option<String>,
    /// Public base joined with bare filenames in upload responses
    pub upload_public_base: Option<String>,
    /// Admin credentials for the CLI login flow
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("UNLSH_API_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string())
            .trim_end_matches('/')
            .to_string();

        let upload_endpoint = env::var("UNLSH_UPLOAD_ENDPOINT").ok();

        let upload_public_base = env::var("UNLSH_UPLOAD_PUBLIC_BASE")
            .ok()
            .map(|base| base.trim_end_matches('/').to_string());

        let admin_email = env::var("UNLSH_ADMIN_EMAIL").ok();
        let admin_password = env::var("UNLSH_ADMIN_PASSWORD").ok();

        let log_level = env::var("UNLSH_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            api_base_url,
            upload_endpoint,
            upload_public_base,
            admin_email,
            admin_password,
            log_level,
        }
    }
}
