//! Types-and-roles coordinator
//!
//! Thin state machine over the task type, activity type and role collections:
//! which tab is active, which entity (if any) is being edited, and the last
//! surfaced error. Every successful mutation triggers a full refetch of the
//! collections; a failed save leaves the dialog open for correction.

use parking_lot::RwLock;
use tracing::{debug, warn};

use super::types::{AdminTab, EditTarget, EntityDraft, TaxonomyState};
use crate::api::ApiClient;
use crate::utils::error::Result;

/// Coordinator for the types-and-roles management surface.
pub struct TaxonomyCoordinator {
    api: ApiClient,
    state: RwLock<TaxonomyState>,
}

impl TaxonomyCoordinator {
    /// Create a coordinator with empty collections.
    ///
    /// Call [`refresh`](Self::refresh) once to populate them.
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: RwLock::new(TaxonomyState {
                loading: true,
                ..TaxonomyState::default()
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> TaxonomyState {
        self.state.read().clone()
    }

    /// Switch tabs. Any open dialog is closed, keeping the "one dialog,
    /// matching the active tab" invariant.
    pub fn select_tab(&self, tab: AdminTab) {
        let mut state = self.state.write();
        state.active_tab = tab;
        state.dialog = None;
    }

    /// Open the create dialog for the active tab.
    pub fn open_create(&self) {
        let mut state = self.state.write();
        state.dialog = Some(match state.active_tab {
            AdminTab::TaskTypes => EditTarget::TaskType(None),
            AdminTab::ActivityTypes => EditTarget::ActivityType(None),
            AdminTab::Roles => EditTarget::Role(None),
        });
    }

    /// Open the edit dialog for an existing entity, aligning the tab with it.
    pub fn open_edit(&self, target: EditTarget) {
        let mut state = self.state.write();
        state.active_tab = target.tab();
        state.dialog = Some(target);
    }

    /// Close the dialog without saving.
    pub fn close_dialog(&self) {
        self.state.write().dialog = None;
    }

    /// Refetch all three collections.
    pub async fn refresh(&self) {
        self.state.write().loading = true;

        let fetched = futures::try_join!(
            self.api.get_task_types(),
            self.api.get_activity_types(),
            self.api.get_roles(),
        );

        let mut state = self.state.write();
        state.loading = false;
        match fetched {
            Ok((task_types, activity_types, roles)) => {
                debug!(
                    "Fetched {} task types, {} activity types, {} roles",
                    task_types.len(),
                    activity_types.len(),
                    roles.len()
                );
                state.task_types = task_types;
                state.activity_types = activity_types;
                state.roles = roles;
                state.error = None;
            }
            Err(err) => {
                warn!("Failed to fetch types and roles: {err}");
                state.error = Some(err.to_string());
            }
        }
    }

    /// Save the submitted dialog form.
    ///
    /// On success the dialog is closed and the collections are refetched; on
    /// failure the error is surfaced and the dialog stays open.
    pub async fn save(&self, draft: EntityDraft) {
        let Some(dialog) = self.state.read().dialog.clone() else {
            self.state.write().error = Some("No dialog is open".to_string());
            return;
        };

        match self.dispatch_save(dialog, draft).await {
            Ok(()) => {
                self.close_dialog();
                self.refresh().await;
            }
            Err(err) => {
                warn!("Failed to save item: {err}");
                // Dialog stays open so the user can correct the form.
                self.state.write().error = Some(err.to_string());
            }
        }
    }

    async fn dispatch_save(&self, dialog: EditTarget, draft: EntityDraft) -> Result<()> {
        match (dialog, draft) {
            (EditTarget::TaskType(existing), EntityDraft::TaskType(draft)) => match existing {
                Some(current) => self.api.update_task_type(current.id, &draft).await.map(drop),
                None => self.api.create_task_type(&draft).await.map(drop),
            },
            (EditTarget::ActivityType(existing), EntityDraft::ActivityType(draft)) => {
                match existing {
                    Some(current) => self
                        .api
                        .update_activity_type(current.id, &draft)
                        .await
                        .map(drop),
                    None => self.api.create_activity_type(&draft).await.map(drop),
                }
            }
            (EditTarget::Role(existing), EntityDraft::Role(draft)) => match existing {
                Some(current) => self.api.update_role(current.id, &draft).await.map(drop),
                None => self.api.create_role(&draft).await.map(drop),
            },
            (dialog, draft) => Err(crate::utils::error::AdminError::validation(format!(
                "Submitted {draft:?} does not match the open {dialog:?} dialog"
            ))),
        }
    }

    /// Delete the entity with `id` on the active tab, then refetch.
    pub async fn delete(&self, id: i64) {
        let active_tab = self.state.read().active_tab;
        let result = match active_tab {
            AdminTab::TaskTypes => self.api.delete_task_type(id).await,
            AdminTab::ActivityTypes => self.api.delete_activity_type(id).await,
            AdminTab::Roles => self.api.delete_role(id).await,
        };

        match result {
            Ok(()) => self.refresh().await,
            Err(err) => {
                warn!("Failed to delete item {id}: {err}");
                self.state.write().error = Some(err.to_string());
            }
        }
    }
}
