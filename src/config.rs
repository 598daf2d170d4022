//! Runtime configuration
//!
//! The API base URL is resolved in order: explicit override, the
//! `PEDIDOS_API_URL` variable captured at compile time, then the default.

/// Used when neither an override nor `PEDIDOS_API_URL` is set.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Name of the environment variable read at build time.
pub const API_URL_VAR: &str = "PEDIDOS_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Resolves the base URL from an optional runtime override.
    ///
    /// Blank overrides are ignored.
    pub fn resolve(runtime_override: Option<String>) -> Self {
        let base_url = runtime_override
            .filter(|url| !url.trim().is_empty())
            .or_else(|| option_env!("PEDIDOS_API_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(base_url.trim())
    }

    /// Joins an endpoint path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::resolve(None)
    }
}
