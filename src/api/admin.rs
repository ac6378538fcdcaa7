//! Administration endpoints: permission catalog, roles, type taxonomies

use tracing::error;

use super::client::ApiClient;
use super::types::{
    ActivityType, ActivityTypeDraft, Permission, Role, RoleDraft, TaskType, TaskTypeDraft,
};
use crate::utils::error::Result;

impl ApiClient {
    /// Fetch the full permission catalog.
    pub async fn get_all_permissions(&self) -> Result<Vec<Permission>> {
        self.get("/admin/permissions")
            .await
            .inspect_err(|e| error!("Failed to fetch permissions: {e}"))
    }

    /// Fetch all roles, permissions carried by id.
    pub async fn get_roles(&self) -> Result<Vec<Role>> {
        self.get("/roles")
            .await
            .inspect_err(|e| error!("Failed to fetch roles: {e}"))
    }

    /// Create a role.
    pub async fn create_role(&self, draft: &RoleDraft) -> Result<Role> {
        self.post("/roles", draft)
            .await
            .inspect_err(|e| error!("Failed to create role: {e}"))
    }

    /// Update a role.
    pub async fn update_role(&self, id: i64, draft: &RoleDraft) -> Result<Role> {
        self.put(&format!("/roles/{id}"), draft)
            .await
            .inspect_err(|e| error!("Failed to update role {id}: {e}"))
    }

    /// Delete a role.
    pub async fn delete_role(&self, id: i64) -> Result<()> {
        self.delete(&format!("/roles/{id}"))
            .await
            .inspect_err(|e| error!("Failed to delete role {id}: {e}"))
    }

    /// Fetch all task types.
    pub async fn get_task_types(&self) -> Result<Vec<TaskType>> {
        self.get("/admin/task-types")
            .await
            .inspect_err(|e| error!("Failed to fetch task types: {e}"))
    }

    /// Create a task type.
    pub async fn create_task_type(&self, draft: &TaskTypeDraft) -> Result<TaskType> {
        self.post("/admin/task-types", draft)
            .await
            .inspect_err(|e| error!("Failed to create task type: {e}"))
    }

    /// Update a task type.
    pub async fn update_task_type(&self, id: i64, draft: &TaskTypeDraft) -> Result<TaskType> {
        self.put(&format!("/admin/task-types/{id}"), draft)
            .await
            .inspect_err(|e| error!("Failed to update task type {id}: {e}"))
    }

    /// Delete a task type.
    pub async fn delete_task_type(&self, id: i64) -> Result<()> {
        self.delete(&format!("/admin/task-types/{id}"))
            .await
            .inspect_err(|e| error!("Failed to delete task type {id}: {e}"))
    }

    /// Fetch all activity types.
    pub async fn get_activity_types(&self) -> Result<Vec<ActivityType>> {
        self.get("/admin/activity-types")
            .await
            .inspect_err(|e| error!("Failed to fetch activity types: {e}"))
    }

    /// Create an activity type.
    pub async fn create_activity_type(&self, draft: &ActivityTypeDraft) -> Result<ActivityType> {
        self.post("/admin/activity-types", draft)
            .await
            .inspect_err(|e| error!("Failed to create activity type: {e}"))
    }

    /// Update an activity type.
    pub async fn update_activity_type(
        &self,
        id: i64,
        draft: &ActivityTypeDraft,
    ) -> Result<ActivityType> {
        self.put(&format!("/admin/activity-types/{id}"), draft)
            .await
            .inspect_err(|e| error!("Failed to update activity type {id}: {e}"))
    }

    /// Delete an activity type.
    pub async fn delete_activity_type(&self, id: i64) -> Result<()> {
        self.delete(&format!("/admin/activity-types/{id}"))
            .await
            .inspect_err(|e| error!("Failed to delete activity type {id}: {e}"))
    }
}
