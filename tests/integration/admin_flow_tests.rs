//! Admin surface flows: taxonomy CRUD, user directory, settings

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use taskhub_admin::admin::{AdminTab, EditTarget, EntityDraft};
use taskhub_admin::api::{RoleDraft, TaskTypeDraft, UserDraft};
use taskhub_admin::auth::grouping;
use taskhub_admin::{SettingsPanel, TaxonomyCoordinator, UserDirectory};

use crate::common::MockBackend;

#[tokio::test]
async fn test_taxonomy_create_flow() {
    let backend = MockBackend::start().await;
    backend.mount_admin_collections().await;
    Mock::given(method("POST"))
        .and(path("/admin/task-types"))
        .and(body_json(json!({
            "name": "Chore",
            "color": "#9e9e9e",
            "active": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!(
            {"id": 3, "name": "Chore", "color": "#9e9e9e"}
        )))
        .expect(1)
        .mount(&backend.server)
        .await;

    let coordinator = TaxonomyCoordinator::new(backend.client());
    coordinator.refresh().await;
    assert_eq!(coordinator.state().task_types.len(), 2);

    coordinator.open_create();
    coordinator
        .save(EntityDraft::TaskType(TaskTypeDraft {
            name: "Chore".to_string(),
            color: "#9e9e9e".to_string(),
            active: true,
            ..Default::default()
        }))
        .await;

    let state = coordinator.state();
    assert!(state.dialog.is_none());
    assert!(state.error.is_none());
}

#[tokio::test]
async fn test_role_edit_dialog_hydrates_and_groups() {
    let backend = MockBackend::start().await;
    backend.mount_admin_collections().await;

    let client = backend.client();
    let catalog = client.get_all_permissions().await.unwrap();

    let coordinator = TaxonomyCoordinator::new(client);
    coordinator.refresh().await;

    let manager = coordinator.state().roles[1].clone();
    assert_eq!(manager.name, "Manager");
    coordinator.open_edit(EditTarget::Role(Some(manager.clone())));
    assert_eq!(coordinator.state().active_tab, AdminTab::Roles);

    // The dialog renders the role's permissions grouped by category.
    let hydrated = grouping::hydrate(&manager, &catalog);
    let groups = grouping::group_by_category(&hydrated);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups["project"].len(), 2);
    assert_eq!(groups["task"].len(), 1);
}

#[tokio::test]
async fn test_role_save_failure_keeps_dialog_for_correction() {
    let backend = MockBackend::start().await;
    backend.mount_admin_collections().await;
    Mock::given(method("PUT"))
        .and(path("/roles/2"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"error": "Role name is required"})),
        )
        .mount(&backend.server)
        .await;

    let coordinator = TaxonomyCoordinator::new(backend.client());
    coordinator.refresh().await;
    let manager = coordinator.state().roles[1].clone();
    coordinator.open_edit(EditTarget::Role(Some(manager)));

    coordinator
        .save(EntityDraft::Role(RoleDraft {
            name: String::new(),
            description: None,
            permission_ids: vec![1, 2],
        }))
        .await;

    let state = coordinator.state();
    assert!(state.dialog.is_some());
    assert_eq!(
        state.error.as_deref(),
        Some("Validation error: Role name is required")
    );
}

#[tokio::test]
async fn test_user_directory_flow() {
    let backend = MockBackend::start().await;
    backend.mount_admin_collections().await;
    Mock::given(method("PATCH"))
        .and(path("/users/7/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            {"id": 7, "login": "pmuller", "name": "Paula", "role_id": 2, "active": false}
        )))
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!(
            {"id": 8, "login": "asmith", "name": "Anna", "role_id": 3}
        )))
        .expect(1)
        .mount(&backend.server)
        .await;

    let directory = UserDirectory::new(backend.client());
    directory.refresh().await;
    let state = directory.state();
    assert_eq!(state.users.len(), 2);
    // The role selector is populated alongside the users.
    assert_eq!(state.roles.len(), 3);

    directory.toggle_status(7).await;
    assert!(directory.state().error.is_none());

    directory.open_create();
    directory
        .save(UserDraft {
            login: "asmith".to_string(),
            name: "Anna".to_string(),
            password: Some("initial".to_string()),
            role_id: 3,
            active: true,
            ..Default::default()
        })
        .await;
    assert!(directory.state().dialog.is_none());
}

#[tokio::test]
async fn test_settings_flow() {
    let backend = MockBackend::start().await;
    backend.mount_admin_collections().await;
    Mock::given(method("PUT"))
        .and(path("/settings/app_settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "app_name": "TaskHub Pro",
            "company_name": "Acme",
            "sender_email": "noreply@acme.com",
            "time_zone": "Europe/Berlin",
            "theme": "dark"
        })))
        .mount(&backend.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/settings/test-smtp"))
        .and(body_json(json!({"email": "ops@acme.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "SMTP test successful",
            "messageId": "msg-42"
        })))
        .mount(&backend.server)
        .await;

    let panel = SettingsPanel::new(backend.client());
    panel.load().await;

    let mut settings = panel.state().settings.expect("settings loaded");
    assert_eq!(settings.app_name, "TaskHub");

    settings.app_name = "TaskHub Pro".to_string();
    settings.theme = "dark".to_string();
    panel.save(settings).await;

    let state = panel.state();
    assert!(state.success);
    assert_eq!(state.settings.unwrap().app_name, "TaskHub Pro");

    let outcome = panel.test_smtp("ops@acme.com").await.unwrap();
    assert!(outcome.success);
    assert_eq!(outcome.message_id.as_deref(), Some("msg-42"));
}
