//! Client configuration
//!
//! Configuration is always built explicitly through [`ConfigBuilder`]; there
//! are no ambient globals or environment lookups hidden inside the client.

pub mod builder;

pub use builder::ConfigBuilder;

use serde::{Deserialize, Serialize};

/// Configuration for [`ApiClient`](crate::api::ApiClient)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the TaskHub backend, e.g. `https://taskhub.example.com/api`
    pub base_url: String,
    /// Tunable client settings
    pub settings: ClientSettings,
}

/// Settings applied to the underlying HTTP client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Request timeout in seconds
    pub timeout: u64,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: format!("taskhub-admin/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
