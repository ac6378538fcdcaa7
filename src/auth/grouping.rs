//! Permission grouping model
//!
//! Deterministic, purely derived transformations of the flat permission
//! catalog, used by role-editing surfaces to present permissions grouped by
//! category.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::api::{Permission, Role};

/// Partition a flat permission catalog into categories.
///
/// The category key of a permission is the substring of its name before the
/// first `_`; a name without `_` is its own category, and an empty name lands
/// in the empty-string bucket. Within each bucket, permissions keep the order
/// in which they first appeared in the input. Inactive permissions are not
/// filtered; callers filter beforehand if desired (see [`active_only`]).
pub fn group_by_category(permissions: &[Permission]) -> BTreeMap<String, Vec<Permission>> {
    let mut groups: BTreeMap<String, Vec<Permission>> = BTreeMap::new();
    for permission in permissions {
        let category = permission.name.split('_').next().unwrap_or_default();
        groups
            .entry(category.to_string())
            .or_default()
            .push(permission.clone());
    }
    groups
}

/// Keep only active permissions, preserving order.
pub fn active_only(permissions: &[Permission]) -> Vec<Permission> {
    permissions.iter().filter(|p| p.active).cloned().collect()
}

/// Resolve a role's permission ids to full [`Permission`] values.
///
/// This is the single hydration step at the display boundary; everywhere
/// else the Role↔Permission relationship is carried by id. Ids missing from
/// the catalog are skipped.
pub fn hydrate(role: &Role, catalog: &[Permission]) -> Vec<Permission> {
    let by_id: HashMap<i64, &Permission> = catalog.iter().map(|p| (p.id, p)).collect();
    role.permission_ids
        .iter()
        .filter_map(|id| match by_id.get(id) {
            Some(permission) => Some((*permission).clone()),
            None => {
                debug!("Role {} references unknown permission id {}", role.id, id);
                None
            }
        })
        .collect()
}
