//! Session endpoints: check, login, logout

use serde::Serialize;
use tracing::error;

use super::client::ApiClient;
use super::types::SessionPayload;
use crate::utils::error::Result;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    login: &'a str,
    password: &'a str,
}

impl ApiClient {
    /// Fetch the current session, if the session cookie is still valid.
    pub async fn check_session(&self) -> Result<SessionPayload> {
        self.get("/check-session")
            .await
            .inspect_err(|e| error!("Session check failed: {e}"))
    }

    /// Authenticate with credentials, establishing the session cookie.
    pub async fn login(&self, login: &str, password: &str) -> Result<SessionPayload> {
        self.post("/login", &LoginRequest { login, password })
            .await
            .inspect_err(|e| error!("Login failed: {e}"))
    }

    /// End the backend session.
    pub async fn logout(&self) -> Result<()> {
        self.post_unit("/logout", &serde_json::json!({}))
            .await
            .inspect_err(|e| error!("Logout failed: {e}"))
    }
}
