//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Default analysis server, the backend's development address
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Default forecast metric
pub const DEFAULT_METRIC: &str = "revenue";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server_url: Option<String>,
    pub metric: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            server_url: Some(DEFAULT_SERVER_URL.to_string()),
            metric: Some(DEFAULT_METRIC.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            server_url: other.server_url.or(self.server_url),
            metric: other.metric.or(self.metric),
        }
    }

    /// Get the server URL, or the default if not set
    pub fn server_url_or_default(&self) -> &str {
        self.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    /// Get the forecast metric, or the default if not set
    pub fn metric_or_default(&self) -> &str {
        self.metric.as_deref().unwrap_or(DEFAULT_METRIC)
    }
}
