use crate::api::Endpoint;

/// Backend used when no URL was provided at build time
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Name of the build-time variable holding the backend URL
pub const BASE_URL_VAR: &str = "LIBNEXT_BACKEND_URL";

/// Where the backend lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build from an optional environment value, typically `option_env!(...)`.
    /// Blank values fall back to [`DEFAULT_BASE_URL`].
    pub fn from_env_value(value: Option<&str>) -> Self {
        let base_url = value
            .map(|v| v.trim().trim_end_matches('/'))
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        Self {
            base_url: base_url.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an endpoint, without its query string
    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env_value(None)
    }
}
