//! Typed REST client for the TaskHub backend
//!
//! One [`ApiClient`] instance is shared by the session store and all admin
//! coordinators; it owns the cookie jar that carries the session cookie.

mod admin;
mod client;
mod session;
mod settings;
mod types;
mod users;

pub use client::ApiClient;
pub use types::{
    ActivityType, ActivityTypeDraft, AppSettings, Permission, Role, RoleDraft, SessionPayload,
    SmtpTestOutcome, TaskType, TaskTypeDraft, User, UserDraft,
};
