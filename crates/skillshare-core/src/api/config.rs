//! API Configuration

use serde::{Deserialize, Serialize};

use crate::domain::{ApiError, ApiResult};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Where the backend lives and how to authenticate against it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default)]
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
        }
    }
}

impl ApiConfig {
    /// Build a config, normalizing the base URL and dropping blank tokens.
    pub fn new(base_url: &str, token: Option<String>) -> ApiResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ApiError::InvalidConfig("base URL is empty".into()));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidConfig(format!("unsupported base URL: {}", base_url)));
        }
        let token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        Ok(Self {
            base_url: base_url.to_string(),
            token,
        })
    }

    /// Parse `{"base_url": ..., "token": ...}`
    pub fn from_json(json: &str) -> ApiResult<Self> {
        let raw: ApiConfig = serde_json::from_str(json)
            .map_err(|e| ApiError::InvalidConfig(e.to_string()))?;
        Self::new(&raw.base_url, raw.token)
    }

    /// Join a path (starting with `/`) onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
