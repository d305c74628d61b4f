// Configuration type definitions

use serde::Deserialize;

/// Server connection section
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            base_url: default_base_url(),
        }
    }
}

/// Search suggester section
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Quiet period before a lookup is issued
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Suggestion rows rendered before the view-all link takes over
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_max_rows() -> usize {
    5
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            debounce_ms: default_debounce_ms(),
            max_rows: default_max_rows(),
        }
    }
}

/// Notification section
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    /// Lifetime of a transient message before it auto-dismisses
    #[serde(default = "default_dismiss_ms")]
    pub dismiss_ms: u64,
}

fn default_dismiss_ms() -> u64 {
    3000
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            dismiss_ms: default_dismiss_ms(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub notification: NotificationConfig,
}
