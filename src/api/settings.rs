//! System settings endpoints

use serde::Serialize;
use tracing::error;

use super::client::ApiClient;
use super::types::{AppSettings, SmtpTestOutcome};
use crate::utils::error::Result;

#[derive(Debug, Serialize)]
struct SmtpTestRequest<'a> {
    email: &'a str,
}

impl ApiClient {
    /// Fetch the system-wide application settings.
    pub async fn get_app_settings(&self) -> Result<AppSettings> {
        self.get("/settings/app_settings")
            .await
            .inspect_err(|e| error!("Failed to fetch app settings: {e}"))
    }

    /// Replace the system-wide application settings.
    pub async fn update_app_settings(&self, settings: &AppSettings) -> Result<AppSettings> {
        self.put("/settings/app_settings", settings)
            .await
            .inspect_err(|e| error!("Failed to update app settings: {e}"))
    }

    /// Send a test email through the configured SMTP server.
    pub async fn test_smtp(&self, email: &str) -> Result<SmtpTestOutcome> {
        self.post("/settings/test-smtp", &SmtpTestRequest { email })
            .await
            .inspect_err(|e| error!("SMTP test failed: {e}"))
    }
}
