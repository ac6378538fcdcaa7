//! # TaskHub Admin
//!
//! Client library for the administration surface of a TaskHub backend:
//! session handling, permission checks, and the CRUD coordinators behind
//! the settings screens (task types, activity types, roles, users, system
//! settings).
//!
//! The backend owns all records; this crate holds read-only snapshots and
//! refetches them after every successful mutation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use taskhub_admin::{ApiClient, ConfigBuilder, SessionStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigBuilder::new()
//!         .base_url("https://taskhub.example.com/api")
//!         .build();
//!     let api = ApiClient::new(config)?;
//!
//!     let store = SessionStore::new(api.clone());
//!     let user = store.login("admin", "secret").await?;
//!     println!("Logged in as {}", user.login);
//!
//!     if store.has_permission("project_create") {
//!         // show the "new project" button
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod admin;
pub mod api;
pub mod auth;
pub mod config;
pub mod utils;

// Re-export main types
pub use admin::{SettingsPanel, TaxonomyCoordinator, UserDirectory};
pub use api::ApiClient;
pub use auth::{ADMIN_ROLE_ID, SessionStore};
pub use config::{ClientConfig, ConfigBuilder};
pub use utils::error::{AdminError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
