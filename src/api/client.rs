//! HTTP plumbing shared by all endpoint wrappers

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

use crate::config::ClientConfig;
use crate::utils::error::{AdminError, Result};

/// Typed client for the TaskHub administration REST surface.
///
/// The client is session-cookie authenticated: a successful `/login` (or an
/// existing browser-style session cookie) is stored in the internal cookie
/// jar and sent with every subsequent request. Cloning is cheap; all clones
/// share the same cookie jar.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: Arc<str>,
}

impl ApiClient {
    /// Create a new client from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| AdminError::config(format!("Invalid base URL '{base_url}': {e}")))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.settings.timeout))
            .user_agent(config.settings.user_agent)
            .cookie_store(true)
            .build()
            .map_err(|e| AdminError::config(format!("Failed to create HTTP client: {e}")))?;

        info!("ApiClient created for {}", base_url);

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!("GET {}", path);
        let response = self.http.get(self.url(path)).send().await?;
        Self::read_json(response).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST {}", path);
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::read_json(response).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("PUT {}", path);
        let response = self.http.put(self.url(path)).json(body).send().await?;
        Self::read_json(response).await
    }

    /// POST for endpoints that reply with an empty body.
    pub(crate) async fn post_unit<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        debug!("POST {}", path);
        let response = self.http.post(self.url(path)).json(body).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(Self::error_for(status, response.text().await.unwrap_or_default()))
    }

    pub(crate) async fn patch<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!("PATCH {}", path);
        let response = self
            .http
            .patch(self.url(path))
            .json(&serde_json::json!({}))
            .send()
            .await?;
        Self::read_json(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        debug!("DELETE {}", path);
        let response = self.http.delete(self.url(path)).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(Self::error_for(status, response.text().await.unwrap_or_default()))
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        Err(Self::error_for(status, response.text().await.unwrap_or_default()))
    }

    /// Map a non-success response into the error taxonomy.
    ///
    /// The backend reports failures as `{"error": "..."}`; anything else is
    /// carried through verbatim.
    fn error_for(status: StatusCode, body: String) -> AdminError {
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or(body);

        match status {
            StatusCode::UNAUTHORIZED => AdminError::SessionExpired,
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                AdminError::Validation(message)
            }
            StatusCode::NOT_FOUND => AdminError::NotFound(message),
            StatusCode::CONFLICT => AdminError::Conflict(message),
            _ => AdminError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}
