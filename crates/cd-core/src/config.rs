//! Configuration types and loading
//!
//! Connection settings for the delivery API and the route selection a transport
//! needs to pick the search URL for a session.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// API version segment of every delivery route
pub const API_VERSION: &str = "v1";

const PUBLIC_CONTENT: &str = "delivery";
const PROTECTED_CONTENT: &str = "mydelivery";
const SEARCH_PATH: &str = "search";
const RENDERING_SEARCH_PATH: &str = "rendering/search";

static PREVIEW_HOST: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//my(.*?)\.").unwrap());

/// Connection configuration for the delivery API
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryConfig {
    /// Base API URL including the tenant, e.g. `https://my1.example.com/api/<tenant>`
    pub api_url: String,
    /// Basic auth user name
    pub username: Option<String>,
    /// Basic auth password
    pub password: Option<String>,
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable not set: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl DeliveryConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            username: None,
            password: None,
        }
    }

    /// Set basic auth credentials
    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Load configuration from environment variables
    ///
    /// `CD_API_URL` is required; `CD_USERNAME` and `CD_PASSWORD` are optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("CD_API_URL")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("CD_API_URL".to_string()))?;

        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                key: "CD_API_URL".to_string(),
                message: format!("expected an http(s) URL, got {}", api_url),
            });
        }

        let config = Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            username: lookup("CD_USERNAME").filter(|v| !v.is_empty()),
            password: lookup("CD_PASSWORD").filter(|v| !v.is_empty()),
        };

        tracing::debug!(
            api_url = %config.api_url,
            credentials = config.has_credentials(),
            "Loaded delivery configuration"
        );

        Ok(config)
    }

    /// Both user name and password are present and non-empty
    pub fn has_credentials(&self) -> bool {
        matches!(
            (self.username.as_deref(), self.password.as_deref()),
            (Some(user), Some(pass)) if !user.is_empty() && !pass.is_empty()
        )
    }

    /// Forget the stored credentials (after a logout)
    pub fn clear_credentials(&mut self) {
        self.username = None;
        self.password = None;
    }
}

/// Route flags a transport uses to pick the search endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRoute {
    /// Search protected (authenticated) content
    pub protected_content: bool,
    /// Search rendering contexts with complete content
    pub complete_content_context: bool,
    /// Route through the preview subdomain
    pub preview: bool,
}

impl SearchRoute {
    /// Full search URL for this route
    pub fn search_url(&self, config: &DeliveryConfig) -> String {
        let content = if self.protected_content {
            PROTECTED_CONTENT
        } else {
            PUBLIC_CONTENT
        };
        let path = if self.complete_content_context {
            RENDERING_SEARCH_PATH
        } else {
            SEARCH_PATH
        };

        let url = format!("{}/{}/{}/{}", config.api_url, content, API_VERSION, path);

        if self.preview {
            Self::preview_url(&url)
        } else {
            url
        }
    }

    /// Rewrite the first `my*` host label to its preview counterpart
    pub fn preview_url(url: &str) -> String {
        PREVIEW_HOST.replace(url, "//my${1}-preview.").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const API_URL: &str = "http://my111.test.com/api/xxx-xxx-xxx-xxx";

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_from_lookup() {
        let config = DeliveryConfig::from_lookup(lookup(&[
            ("CD_API_URL", "https://my1.example.com/api/tenant/"),
            ("CD_USERNAME", "user"),
            ("CD_PASSWORD", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "https://my1.example.com/api/tenant");
        assert!(config.has_credentials());
    }

    #[test]
    fn test_from_lookup_missing_url() {
        let err = DeliveryConfig::from_lookup(lookup(&[("CD_USERNAME", "user")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref key) if key == "CD_API_URL"));
    }

    #[test]
    fn test_from_lookup_invalid_url() {
        let err = DeliveryConfig::from_lookup(lookup(&[("CD_API_URL", "ftp://host")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_empty_credentials_are_absent() {
        let config = DeliveryConfig::from_lookup(lookup(&[
            ("CD_API_URL", API_URL),
            ("CD_USERNAME", ""),
            ("CD_PASSWORD", "secret"),
        ]))
        .unwrap();

        assert!(config.username.is_none());
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_clear_credentials() {
        let mut config = DeliveryConfig::new(API_URL).with_credentials("user", "secret");
        assert!(config.has_credentials());

        config.clear_credentials();
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_search_urls() {
        let config = DeliveryConfig::new(API_URL);

        let route = SearchRoute::default();
        assert_eq!(route.search_url(&config), format!("{}/delivery/v1/search", API_URL));

        let route = SearchRoute {
            protected_content: true,
            ..Default::default()
        };
        assert_eq!(route.search_url(&config), format!("{}/mydelivery/v1/search", API_URL));

        let route = SearchRoute {
            complete_content_context: true,
            ..Default::default()
        };
        assert_eq!(
            route.search_url(&config),
            format!("{}/delivery/v1/rendering/search", API_URL)
        );

        let route = SearchRoute {
            protected_content: true,
            complete_content_context: true,
            preview: true,
        };
        assert_eq!(
            route.search_url(&config),
            "http://my111-preview.test.com/api/xxx-xxx-xxx-xxx/mydelivery/v1/rendering/search"
        );
    }

    #[test]
    fn test_preview_url() {
        assert_eq!(
            SearchRoute::preview_url("http://my111.test.com"),
            "http://my111-preview.test.com"
        );
        assert_eq!(SearchRoute::preview_url("http://sub.test.com"), "http://sub.test.com");
        assert_eq!(SearchRoute::preview_url(""), "");
    }
}
