//! Session and authorization system
//!
//! This module owns the session store (current user + granted permission
//! names + memoized authorization decisions) and the permission grouping
//! model used by role-editing surfaces.

pub mod grouping;
mod store;

pub use store::{ADMIN_ROLE_ID, SessionStore};
