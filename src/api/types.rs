//! Wire types for the TaskHub REST surface
//!
//! Records are owned by the backend; the client only holds read-only
//! snapshots refreshed through CRUD calls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// A user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User id
    pub id: i64,
    /// Login name
    pub login: String,
    /// Display name
    pub name: String,
    /// Surname
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Id of the role assigned to this user
    pub role_id: i64,
    /// Resolved role name, when the endpoint embeds it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    /// Whether the account is active
    #[serde(default = "default_true")]
    pub active: bool,
}

/// A named capability a role may grant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    /// Permission id
    pub id: i64,
    /// Permission name, by convention `"<category>_<action>"`
    pub name: String,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the permission is active
    #[serde(default = "default_true")]
    pub active: bool,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<DateTime<Utc>>,
}

/// A named bundle of permissions
///
/// The Role↔Permission relationship is carried by id at the storage boundary;
/// resolving ids to full [`Permission`] values is an explicit hydration step
/// (see [`crate::auth::grouping::hydrate`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    /// Role id
    pub id: i64,
    /// Role name
    pub name: String,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the role is active
    #[serde(default = "default_true")]
    pub active: bool,
    /// Ids of the permissions this role grants
    #[serde(default)]
    pub permission_ids: Vec<i64>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<DateTime<Utc>>,
}

/// A task type taxonomy entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskType {
    /// Task type id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Display color, e.g. `#ff9800`
    pub color: String,
    /// Icon identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the type is selectable for new tasks
    #[serde(default = "default_true")]
    pub active: bool,
}

/// An activity type taxonomy entry (used by time logging)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityType {
    /// Activity type id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Display color
    pub color: String,
    /// Icon identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the type is selectable for new time logs
    #[serde(default = "default_true")]
    pub active: bool,
}

/// System-wide application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Settings row id (the backend keeps a single row)
    pub id: i64,
    /// Application display name
    pub app_name: String,
    /// Company name used in branding
    pub company_name: String,
    /// Sender address for outgoing mail
    pub sender_email: String,
    /// System time zone
    pub time_zone: String,
    /// UI theme
    pub theme: String,
    /// Welcome message shown on the home screen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub welcome_message: Option<String>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<DateTime<Utc>>,
}

/// Outcome of an SMTP configuration test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmtpTestOutcome {
    /// Whether the test message was accepted by the SMTP server
    pub success: bool,
    /// Human-readable outcome description
    pub message: String,
    /// Message id assigned by the SMTP server, when available
    #[serde(
        rename = "messageId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub message_id: Option<String>,
}

/// Response of `/check-session` and `/login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPayload {
    /// The authenticated user
    pub user: User,
    /// Flat set of permission names granted for this session
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Fields accepted when creating or updating a task type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskTypeDraft {
    pub name: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub active: bool,
}

/// Fields accepted when creating or updating an activity type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityTypeDraft {
    pub name: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub active: bool,
}

/// Fields accepted when creating or updating a role
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleDraft {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Selected permissions, always by id
    #[serde(default)]
    pub permission_ids: Vec<i64>,
}

/// Fields accepted when creating or updating a user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDraft {
    pub login: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Omitted on update to keep the current password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role_id: i64,
    pub active: bool,
}
