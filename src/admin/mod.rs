//! Admin CRUD coordinators
//!
//! Thin state machines over the backend collections: which tab is active,
//! which entity is being edited, the last surfaced error. They expose
//! cloneable state snapshots for a presentation layer to render; all
//! mutations go through the backend and end in a refetch.

mod settings;
mod taxonomy;
mod types;
mod users;

pub use settings::SettingsPanel;
pub use taxonomy::TaxonomyCoordinator;
pub use types::{
    AdminTab, EditTarget, EntityDraft, SettingsState, TaxonomyState, UserDialog,
    UserDirectoryState,
};
pub use users::UserDirectory;
