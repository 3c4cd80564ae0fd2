use std::time::Duration;

use crate::status::SUCCESS_CLEAR_DELAY;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/";

/// Client settings, fixed at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub status_clear_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            status_clear_delay: SUCCESS_CLEAR_DELAY,
        }
    }
}

impl ClientConfig {
    /// Reads `FLASHDECK_API_URL` as captured when the crate was compiled.
    pub fn from_build_env() -> Self {
        match option_env!("FLASHDECK_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::default().with_api_base_url(url),
            _ => Self::default(),
        }
    }

    /// Endpoints are appended verbatim, so the base always ends with `/`.
    pub fn with_api_base_url(mut self, url: &str) -> Self {
        let url = url.trim();
        self.api_base_url = if url.ends_with('/') {
            url.to_string()
        } else {
            format!("{url}/")
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        let config = ClientConfig::default().with_api_base_url("https://cards.example.com/v1");
        assert_eq!(config.api_base_url, "https://cards.example.com/v1/");

        let config = ClientConfig::default().with_api_base_url(" http://localhost:8000/ ");
        assert_eq!(config.api_base_url, "http://localhost:8000/");
    }

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.status_clear_delay, Duration::from_secs(3));
    }
}
