//! Application Configuration
//!
//! Resolved once at startup: host-page `<meta>` override, then build-time
//! environment, then defaults.

use log::LevelFilter;
use wasm_bindgen::JsCast;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const TOKEN_STORAGE_KEY: &str = "token";
const API_URL_META: &str = "spellforge-api-url";
const DEFAULT_TOAST_TIMEOUT_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the spell API, no trailing slash
    pub api_base_url: String,
    /// localStorage key holding the bearer token
    pub token_storage_key: &'static str,
    pub log_level: LevelFilter,
    pub toast_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            token_storage_key: TOKEN_STORAGE_KEY,
            log_level: LevelFilter::Info,
            toast_timeout_ms: DEFAULT_TOAST_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    /// Resolve from the running page
    pub fn load() -> Self {
        Self::resolve(
            meta_content(API_URL_META).as_deref(),
            option_env!("SPELLFORGE_API_URL"),
            option_env!("LOG_LEVEL"),
        )
    }

    /// Pure resolution from the candidate sources, highest priority first
    pub fn resolve(meta_url: Option<&str>, env_url: Option<&str>, env_level: Option<&str>) -> Self {
        let api_base_url = [meta_url, env_url]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .map(normalize_base_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let log_level = env_level
            .and_then(|lvl| lvl.trim().parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            api_base_url,
            log_level,
            ..Self::default()
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// `content` of `<meta name="...">` in the host page
fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
    Some(meta.content())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_overrides_env() {
        let config = AppConfig::resolve(Some("https://api.example.com/"), Some("http://env:9000"), None);
        assert_eq!(config.api_base_url, "https://api.example.com");
    }

    #[test]
    fn test_blank_sources_fall_through() {
        let config = AppConfig::resolve(Some("  "), Some("http://env:9000//"), None);
        assert_eq!(config.api_base_url, "http://env:9000");

        let config = AppConfig::resolve(None, None, None);
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.token_storage_key, "token");
    }

    #[test]
    fn test_log_level() {
        assert_eq!(AppConfig::resolve(None, None, Some("debug")).log_level, LevelFilter::Debug);
        assert_eq!(AppConfig::resolve(None, None, Some("loud")).log_level, LevelFilter::Info);
    }
}
