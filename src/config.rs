//! API Configuration
//!
//! The backend URL is fixed at build time through `SKILLSHARE_API_URL`;
//! the bearer token is whatever the login flow left in `localStorage`.

use log::warn;
use skillshare_core::api::DEFAULT_BASE_URL;
use skillshare_core::ApiConfig;

const TOKEN_KEY: &str = "token";

fn stored_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(TOKEN_KEY).ok()?
}

pub fn api_config() -> ApiConfig {
    let base_url = option_env!("SKILLSHARE_API_URL").unwrap_or(DEFAULT_BASE_URL);
    let token = stored_token();
    match ApiConfig::new(base_url, token.clone()) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring SKILLSHARE_API_URL: {}", e);
            ApiConfig::new(DEFAULT_BASE_URL, token).unwrap_or_default()
        }
    }
}
