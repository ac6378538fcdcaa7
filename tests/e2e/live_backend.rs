//! Smoke tests for a real backend

use taskhub_admin::config::ConfigBuilder;
use taskhub_admin::{ApiClient, SessionStore};

use crate::skip_without_env;

fn live_client() -> ApiClient {
    let base_url = std::env::var("TASKHUB_BASE_URL").expect("TASKHUB_BASE_URL is set");
    let config = ConfigBuilder::new().base_url(base_url).build();
    ApiClient::new(config).expect("valid base url")
}

#[tokio::test]
#[ignore = "requires a live backend"]
async fn test_login_and_session_roundtrip() {
    skip_without_env!("TASKHUB_BASE_URL");
    skip_without_env!("TASKHUB_LOGIN");
    skip_without_env!("TASKHUB_PASSWORD");

    let login = std::env::var("TASKHUB_LOGIN").unwrap();
    let password = std::env::var("TASKHUB_PASSWORD").unwrap();

    let store = SessionStore::new(live_client());
    let user = store.login(&login, &password).await.expect("login succeeds");
    assert_eq!(user.login, login);

    assert!(store.check_session().await);
    store.logout().await;
    assert!(store.current_user().is_none());
}

#[tokio::test]
#[ignore = "requires a live backend"]
async fn test_admin_collections_are_readable() {
    skip_without_env!("TASKHUB_BASE_URL");
    skip_without_env!("TASKHUB_LOGIN");
    skip_without_env!("TASKHUB_PASSWORD");

    let client = live_client();
    let store = SessionStore::new(client.clone());
    store
        .login(
            &std::env::var("TASKHUB_LOGIN").unwrap(),
            &std::env::var("TASKHUB_PASSWORD").unwrap(),
        )
        .await
        .expect("login succeeds");

    let permissions = client.get_all_permissions().await.expect("catalog loads");
    assert!(!permissions.is_empty());

    let roles = client.get_roles().await.expect("roles load");
    assert!(!roles.is_empty());
}
