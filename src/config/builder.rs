//! Configuration builder for type-safe configuration construction

use super::{ClientConfig, ClientSettings};

/// Builder for creating client configurations
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    base_url: String,
    settings: ClientSettings,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
            settings: ClientSettings::default(),
        }
    }

    /// Set the backend base URL
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout in seconds
    pub fn timeout(mut self, timeout: u64) -> Self {
        self.settings.timeout = timeout;
        self
    }

    /// Override the user agent
    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.settings.user_agent = user_agent.into();
        self
    }

    /// Build the final configuration
    pub fn build(self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            settings: self.settings,
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
