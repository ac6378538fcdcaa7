//! User directory coordinator

use parking_lot::RwLock;
use tracing::{debug, warn};

use super::types::{UserDialog, UserDirectoryState};
use crate::api::{ApiClient, User, UserDraft};
use crate::utils::error::Result;

/// Coordinator for the user management surface.
pub struct UserDirectory {
    api: ApiClient,
    state: RwLock<UserDirectoryState>,
}

impl UserDirectory {
    /// Create a coordinator with an empty directory.
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: RwLock::new(UserDirectoryState {
                loading: true,
                ..UserDirectoryState::default()
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> UserDirectoryState {
        self.state.read().clone()
    }

    /// Refetch users and the role list backing the role selector.
    pub async fn refresh(&self) {
        self.state.write().loading = true;

        let fetched = futures::try_join!(self.api.get_users(), self.api.get_roles());

        let mut state = self.state.write();
        state.loading = false;
        match fetched {
            Ok((users, roles)) => {
                debug!("Fetched {} users, {} roles", users.len(), roles.len());
                state.users = users;
                state.roles = roles;
                state.error = None;
            }
            Err(err) => {
                warn!("Failed to fetch users: {err}");
                state.error = Some(err.to_string());
            }
        }
    }

    /// Open the create dialog.
    pub fn open_create(&self) {
        self.state.write().dialog = Some(UserDialog::Create);
    }

    /// Open the edit dialog for an existing user.
    pub fn open_edit(&self, user: User) {
        self.state.write().dialog = Some(UserDialog::Edit(user));
    }

    /// Close the dialog without saving.
    pub fn close_dialog(&self) {
        self.state.write().dialog = None;
    }

    /// Save the submitted user form.
    ///
    /// Creates or updates depending on the open dialog; on success the dialog
    /// is closed and the directory refetched, on failure the dialog stays
    /// open with the error surfaced.
    pub async fn save(&self, draft: UserDraft) {
        let Some(dialog) = self.state.read().dialog.clone() else {
            self.state.write().error = Some("No dialog is open".to_string());
            return;
        };

        let result: Result<()> = match dialog {
            UserDialog::Create => self.api.create_user(&draft).await.map(drop),
            UserDialog::Edit(current) => self.api.update_user(current.id, &draft).await.map(drop),
        };

        match result {
            Ok(()) => {
                self.close_dialog();
                self.refresh().await;
            }
            Err(err) => {
                warn!("Failed to save user: {err}");
                self.state.write().error = Some(err.to_string());
            }
        }
    }

    /// Delete a user, then refetch.
    pub async fn remove(&self, id: i64) {
        match self.api.delete_user(id).await {
            Ok(()) => self.refresh().await,
            Err(err) => {
                warn!("Failed to delete user {id}: {err}");
                self.state.write().error = Some(err.to_string());
            }
        }
    }

    /// Toggle a user's active status, then refetch.
    pub async fn toggle_status(&self, id: i64) {
        match self.api.change_user_status(id).await {
            Ok(_) => self.refresh().await,
            Err(err) => {
                warn!("Failed to change status of user {id}: {err}");
                self.state.write().error = Some(err.to_string());
            }
        }
    }
}
