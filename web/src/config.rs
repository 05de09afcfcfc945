use serde::{Deserialize, Serialize};

pub const DEFAULT_SEARCH_RADIUS_M: u32 = 5000;
pub const DEFAULT_RESULT_LIMIT: u32 = 20;
pub const DEFAULT_ZOOM: f64 = 13.0;
pub const FOCUS_ZOOM: f64 = 15.0;

/// Settings the browser bundle needs. They are baked in at build time since the
/// wasm side has no process environment.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Backend origin for `/api/...` calls. `None` means the page's own origin.
    pub api_origin: Option<String>,
    pub geoapify_api_key: Option<String>,
    pub search_radius_m: u32,
    pub result_limit: u32,
    pub initial_zoom: f64,
    pub focus_zoom: f64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_origin: None,
            geoapify_api_key: None,
            search_radius_m: DEFAULT_SEARCH_RADIUS_M,
            result_limit: DEFAULT_RESULT_LIMIT,
            initial_zoom: DEFAULT_ZOOM,
            focus_zoom: FOCUS_ZOOM,
        }
    }
}

impl ClientConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("HAUSPITAL_API_ORIGIN"),
            option_env!("GEOAPIFY_API_KEY"),
            option_env!("HAUSPITAL_SEARCH_RADIUS_M"),
            option_env!("HAUSPITAL_RESULT_LIMIT"),
        )
    }

    fn from_values(
        api_origin: Option<&str>,
        api_key: Option<&str>,
        radius: Option<&str>,
        limit: Option<&str>,
    ) -> Self {
        let non_empty = |v: Option<&str>| {
            v.map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        let defaults = Self::default();
        Self {
            api_origin: non_empty(api_origin),
            geoapify_api_key: non_empty(api_key),
            search_radius_m: radius
                .and_then(|r| r.trim().parse().ok())
                .unwrap_or(defaults.search_radius_m),
            result_limit: limit
                .and_then(|l| l.trim().parse().ok())
                .unwrap_or(defaults.result_limit),
            ..defaults
        }
    }

    /// Origin to prefix API paths with, falling back to `page_origin`.
    pub fn api_origin_or(&self, page_origin: &str) -> String {
        self.api_origin
            .clone()
            .unwrap_or_else(|| page_origin.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = ClientConfig::from_values(Some(" "), None, Some("abc"), None);
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn values_override_defaults() {
        let config = ClientConfig::from_values(
            Some("http://localhost:8000"),
            Some("key"),
            Some("2500"),
            Some("5"),
        );
        assert_eq!(config.api_origin.as_deref(), Some("http://localhost:8000"));
        assert_eq!(config.geoapify_api_key.as_deref(), Some("key"));
        assert_eq!(config.search_radius_m, 2500);
        assert_eq!(config.result_limit, 5);
        assert_eq!(config.api_origin_or("http://page"), "http://localhost:8000");
    }

    #[test]
    fn page_origin_is_used_without_override() {
        assert_eq!(
            ClientConfig::default().api_origin_or("https://hauspital.test"),
            "https://hauspital.test"
        );
    }
}
