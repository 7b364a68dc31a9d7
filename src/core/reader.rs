//! Single-secret and group reads.

use tracing::{debug, trace};

use crate::core::domain::{SecretLookup, SecretRecord};
use crate::core::path::SecretPath;
use crate::core::resolve::find_entry;
use crate::core::store::TreeStore;

/// Read the entry at `path`.
pub fn read_secret<S: TreeStore + ?Sized>(store: &S, path: &SecretPath) -> SecretLookup {
    find_entry(store, path)
        .and_then(|id| store.entry(id))
        .map(|entry| SecretLookup::Found(SecretRecord::from_entry(path.name(), entry)))
        .unwrap_or(SecretLookup::Absent)
}

/// Read every direct entry of the group at `path`.
///
/// The whole path names the group. A missing group yields an empty list.
/// Entries are returned in the store's enumeration order; each one is
/// looked up again by its own path and skipped if that lookup fails.
/// Subgroups are not descended into.
pub fn read_group<S: TreeStore + ?Sized>(store: &S, path: &SecretPath) -> Vec<SecretRecord> {
    let Some(group) = store.find_group(path.segments()) else {
        debug!(path = %path, "group not found");
        return Vec::new();
    };

    let records: Vec<SecretRecord> = store
        .group_entries(group)
        .into_iter()
        .filter_map(|id| {
            let entry_path = store.entry_path(id)?;
            let Some(found) = store.find_entry(&entry_path) else {
                trace!(entry = id.0, "entry no longer resolvable, skipping");
                return None;
            };
            let name = entry_path.last()?;
            store
                .entry(found)
                .map(|entry| SecretRecord::from_entry(name, entry))
        })
        .collect();

    debug!(path = %path, entries = records.len(), "group read");
    records
}
