//! Client configuration.

/// Where and how to reach the API server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme, host, and port of the API server.
    pub base_url: String,
    /// Sent as `X-Turbine-Api-Key` on every request.
    pub api_key: String,
    /// Per-request timeout.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            api_key: String::new(),
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Build a config from `TURBINE_API_HOST` / `TURBINE_API_KEY`,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("TURBINE_API_HOST") {
            config.base_url = url;
        }
        if let Ok(key) = std::env::var("TURBINE_API_KEY") {
            config.api_key = key;
        }
        config
    }
}
