use crate::error::Error;
use std::env;

pub const DEFAULT_API_URL: &str = "https://api.esa.io";

/// Runtime configuration for the esa API client.
/// Values are sourced from environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub api_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment.
    ///
    /// Env vars:
    /// - ESA_ACCESS_TOKEN [required]
    /// - ESA_API_URL (default: https://api.esa.io)
    /// - ESA_HTTP_TIMEOUT_SECS (default: 30)
    /// - ESA_USER_AGENT (default: esa-client/<version>)
    pub fn from_env() -> Result<Self, Error> {
        let token = env::var("ESA_ACCESS_TOKEN")
            .map_err(|_| Error::Config("Missing ESA_ACCESS_TOKEN".to_string()))?;
        let api_url = env::var("ESA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let timeout_secs = env::var("ESA_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);
        let user_agent = env::var("ESA_USER_AGENT")
            .unwrap_or_else(|_| format!("esa-client/{}", env!("CARGO_PKG_VERSION")));
        Ok(Self::new(token, api_url, user_agent, timeout_secs))
    }

    pub fn new(token: String, api_url: String, user_agent: String, timeout_secs: u64) -> Self {
        Self {
            token,
            api_url: api_url.trim_end_matches('/').to_string(),
            user_agent,
            timeout_secs,
        }
    }
}
