// src/config.rs
use crate::error::RelayError;

pub const BACKEND_PORT: u16 = 3000;
pub const FRONTEND_PORT: u16 = 5173;

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Settings for the backend relay process.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub api_key: String,
    pub model: String,
}

impl BackendConfig {
    pub fn from_env() -> Result<Self, RelayError> {
        let api_key = std::env::var("GOOGLE_API_KEY")
            .map_err(|_| RelayError::Config("GOOGLE_API_KEY is not set".to_string()))?;
        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self { api_key, model })
    }
}

/// Settings for the frontend process. `api_url` is the public base URL of the
/// backend relay, the counterpart of the web app's single public config value.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    pub api_url: String,
}

impl FrontendConfig {
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("PUBLIC_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self {
            api_url: normalize_base_url(&api_url),
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
