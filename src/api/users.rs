//! User management endpoints

use tracing::error;

use super::client::ApiClient;
use super::types::{User, UserDraft};
use crate::utils::error::Result;

impl ApiClient {
    /// Fetch all users.
    pub async fn get_users(&self) -> Result<Vec<User>> {
        self.get("/users")
            .await
            .inspect_err(|e| error!("Failed to fetch users: {e}"))
    }

    /// Fetch a single user.
    pub async fn get_user(&self, id: i64) -> Result<User> {
        self.get(&format!("/users/{id}"))
            .await
            .inspect_err(|e| error!("Failed to fetch user {id}: {e}"))
    }

    /// Create a user.
    pub async fn create_user(&self, draft: &UserDraft) -> Result<User> {
        self.post("/users", draft)
            .await
            .inspect_err(|e| error!("Failed to create user: {e}"))
    }

    /// Update a user.
    pub async fn update_user(&self, id: i64, draft: &UserDraft) -> Result<User> {
        self.put(&format!("/users/{id}"), draft)
            .await
            .inspect_err(|e| error!("Failed to update user {id}: {e}"))
    }

    /// Delete a user.
    pub async fn delete_user(&self, id: i64) -> Result<()> {
        self.delete(&format!("/users/{id}"))
            .await
            .inspect_err(|e| error!("Failed to delete user {id}: {e}"))
    }

    /// Toggle a user's active status.
    pub async fn change_user_status(&self, id: i64) -> Result<User> {
        self.patch(&format!("/users/{id}/status"))
            .await
            .inspect_err(|e| error!("Failed to change status of user {id}: {e}"))
    }
}
