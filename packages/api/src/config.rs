use std::time::Duration;

/// Fixed overall timeout applied uniformly to every request on native builds.
/// Browser builds rely on the user agent's own fetch limits.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Where the REST backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(option_env!("GYM_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ApiConfig::new("http://gym.example/api/");
        assert_eq!(config.base_url, "http://gym.example/api");
    }
}
