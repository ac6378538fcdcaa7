//! State types for the admin coordinators

use crate::api::{
    ActivityType, ActivityTypeDraft, AppSettings, Role, RoleDraft, TaskType, TaskTypeDraft, User,
};

/// Tabs of the types-and-roles management surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    TaskTypes,
    ActivityTypes,
    Roles,
}

/// The entity a dialog is editing.
///
/// `None` payload means the dialog creates a new entity; `Some` means it
/// edits the carried one. The variant ties the dialog to an entity kind, so
/// adding a new kind forces every dispatch site to handle it.
#[derive(Debug, Clone, PartialEq)]
pub enum EditTarget {
    TaskType(Option<TaskType>),
    ActivityType(Option<ActivityType>),
    Role(Option<Role>),
}

impl EditTarget {
    /// The tab this dialog belongs to.
    pub fn tab(&self) -> AdminTab {
        match self {
            EditTarget::TaskType(_) => AdminTab::TaskTypes,
            EditTarget::ActivityType(_) => AdminTab::ActivityTypes,
            EditTarget::Role(_) => AdminTab::Roles,
        }
    }
}

/// A submitted dialog form
#[derive(Debug, Clone, PartialEq)]
pub enum EntityDraft {
    TaskType(TaskTypeDraft),
    ActivityType(ActivityTypeDraft),
    Role(RoleDraft),
}

/// Snapshot of the types-and-roles coordinator
#[derive(Debug, Clone, Default)]
pub struct TaxonomyState {
    /// Currently selected tab
    pub active_tab: AdminTab,
    /// Task type collection
    pub task_types: Vec<TaskType>,
    /// Activity type collection
    pub activity_types: Vec<ActivityType>,
    /// Role collection, permissions by id
    pub roles: Vec<Role>,
    /// Whether a fetch is in flight
    pub loading: bool,
    /// Last surfaced error, if any
    pub error: Option<String>,
    /// The open dialog; at most one at a time
    pub dialog: Option<EditTarget>,
}

impl Default for AdminTab {
    fn default() -> Self {
        AdminTab::TaskTypes
    }
}

/// The user dialog, when open
#[derive(Debug, Clone, PartialEq)]
pub enum UserDialog {
    Create,
    Edit(User),
}

/// Snapshot of the user directory coordinator
#[derive(Debug, Clone, Default)]
pub struct UserDirectoryState {
    /// User collection
    pub users: Vec<User>,
    /// Roles, for the role selector in the user dialog
    pub roles: Vec<Role>,
    /// Whether a fetch is in flight
    pub loading: bool,
    /// Last surfaced error, if any
    pub error: Option<String>,
    /// The open dialog, if any
    pub dialog: Option<UserDialog>,
}

/// Snapshot of the system settings coordinator
#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    /// Current settings, once loaded
    pub settings: Option<AppSettings>,
    /// Whether a fetch or save is in flight
    pub loading: bool,
    /// Last surfaced error, if any
    pub error: Option<String>,
    /// Whether the last save succeeded
    pub success: bool,
}
