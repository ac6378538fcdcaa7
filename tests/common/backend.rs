//! Mock TaskHub backend
//!
//! Wraps a wiremock server with helpers that mount the endpoints the
//! integration tests drive. Individual tests mount extra expectations on
//! top through [`MockBackend::server`].

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use taskhub_admin::config::ConfigBuilder;
use taskhub_admin::{ApiClient, SessionStore};

use super::fixtures;

/// A mock backend plus the client pointed at it.
pub struct MockBackend {
    pub server: MockServer,
}

impl MockBackend {
    pub async fn start() -> Self {
        super::init_tracing();
        Self {
            server: MockServer::start().await,
        }
    }

    /// A client configured against this backend.
    pub fn client(&self) -> ApiClient {
        let config = ConfigBuilder::new().base_url(self.server.uri()).build();
        ApiClient::new(config).expect("mock server uri is a valid base url")
    }

    /// A fresh session store bound to this backend.
    pub fn store(&self) -> SessionStore {
        SessionStore::new(self.client())
    }

    /// Mount `/login` and `/check-session` answering with the given session.
    pub async fn mount_session(&self, user_id: i64, role_id: i64, permissions: &[&str]) {
        let body = fixtures::session(user_id, role_id, permissions);
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&self.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/check-session"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
        Mock::given(method("POST"))
            .and(path("/logout"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&self.server)
            .await;
    }

    /// Mount the admin collection endpoints with the standard fixtures.
    pub async fn mount_admin_collections(&self) {
        self.mount_get("/admin/permissions", fixtures::permission_catalog())
            .await;
        self.mount_get("/roles", fixtures::roles()).await;
        self.mount_get("/admin/task-types", fixtures::task_types())
            .await;
        self.mount_get("/admin/activity-types", fixtures::activity_types())
            .await;
        self.mount_get("/users", fixtures::users()).await;
        self.mount_get("/settings/app_settings", fixtures::app_settings())
            .await;
    }

    async fn mount_get(&self, endpoint: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }
}
