use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Which location source the runner uses
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LocatorKind {
    /// Coordinates taken from `LATITUDE`/`LONGITUDE`
    Fixed,
    /// Coordinates resolved from the caller's public IP
    Ip,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Generative API key. Not validated here; a bad key fails the upstream call.
    #[serde(default)]
    pub api_key: String,

    /// Generative API base URL
    #[serde(default = "default_gemini_api_url")]
    pub gemini_api_url: String,

    /// Model identifier sent with each request
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    /// Location source
    #[serde(default = "default_locator")]
    pub locator: LocatorKind,

    #[serde(default)]
    pub latitude: Option<f64>,

    #[serde(default)]
    pub longitude: Option<f64>,

    /// IP geolocation endpoint
    #[serde(default = "default_ip_locator_url")]
    pub ip_locator_url: String,

    /// Meal period id (breakfast, brunch, lunch, afternoon, dinner, latenight)
    #[serde(default = "default_search_time")]
    pub search_time: String,

    /// Free-text style or category, empty for the default mix
    #[serde(default)]
    pub search_style: String,

    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_gemini_api_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_locator() -> LocatorKind {
    LocatorKind::Ip
}

fn default_ip_locator_url() -> String {
    "http://ip-api.com/json".to_string()
}

fn default_search_time() -> String {
    "lunch".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of key/value pairs
    pub fn from_vars<I>(vars: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars)
            .map_err(|e| AppError::Config(format!("Failed to load config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config.api_key, "");
        assert_eq!(config.gemini_model, "gemini-2.5-flash");
        assert_eq!(config.locator, LocatorKind::Ip);
        assert_eq!(config.search_time, "lunch");
        assert!(config.latitude.is_none());
    }

    #[test]
    fn test_fixed_locator_with_coordinates() {
        let config = Config::from_vars(vars(&[
            ("API_KEY", "secret"),
            ("LOCATOR", "fixed"),
            ("LATITUDE", "25.03"),
            ("LONGITUDE", "121.56"),
            ("SEARCH_STYLE", "拉麵"),
        ]))
        .unwrap();

        assert_eq!(config.api_key, "secret");
        assert_eq!(config.locator, LocatorKind::Fixed);
        assert_eq!(config.latitude, Some(25.03));
        assert_eq!(config.longitude, Some(121.56));
        assert_eq!(config.search_style, "拉麵");
    }

    #[test]
    fn test_invalid_latitude_is_config_error() {
        let result = Config::from_vars(vars(&[("LATITUDE", "north")]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
