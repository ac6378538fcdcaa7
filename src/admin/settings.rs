//! System settings coordinator

use parking_lot::RwLock;
use tracing::{info, warn};

use super::types::SettingsState;
use crate::api::{ApiClient, AppSettings, SmtpTestOutcome};
use crate::utils::error::Result;

/// Coordinator for the system settings form (branding, timezone, theme,
/// welcome message) and the SMTP test button.
pub struct SettingsPanel {
    api: ApiClient,
    state: RwLock<SettingsState>,
}

impl SettingsPanel {
    /// Create a coordinator with settings not yet loaded.
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: RwLock::new(SettingsState {
                loading: true,
                ..SettingsState::default()
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SettingsState {
        self.state.read().clone()
    }

    /// Fetch the current settings.
    pub async fn load(&self) {
        self.state.write().loading = true;

        let fetched = self.api.get_app_settings().await;

        let mut state = self.state.write();
        state.loading = false;
        match fetched {
            Ok(settings) => {
                state.settings = Some(settings);
                state.error = None;
            }
            Err(err) => {
                warn!("Failed to load app settings: {err}");
                state.error = Some(err.to_string());
            }
        }
    }

    /// Save the settings form.
    ///
    /// The `success` flag is reset on every submit and only set when the
    /// backend accepts the update.
    pub async fn save(&self, settings: AppSettings) {
        {
            let mut state = self.state.write();
            state.loading = true;
            state.success = false;
            state.error = None;
        }

        let saved = self.api.update_app_settings(&settings).await;

        let mut state = self.state.write();
        state.loading = false;
        match saved {
            Ok(settings) => {
                info!("App settings updated");
                state.settings = Some(settings);
                state.success = true;
            }
            Err(err) => {
                warn!("Failed to update app settings: {err}");
                state.error = Some(err.to_string());
            }
        }
    }

    /// Send a test email to `email` through the configured SMTP server.
    ///
    /// The outcome (including backend-reported failure detail) is returned to
    /// the caller for display; transport errors propagate.
    pub async fn test_smtp(&self, email: &str) -> Result<SmtpTestOutcome> {
        let outcome = self.api.test_smtp(email).await?;
        info!(
            "SMTP test {}: {}",
            if outcome.success { "succeeded" } else { "failed" },
            outcome.message
        );
        Ok(outcome)
    }
}
