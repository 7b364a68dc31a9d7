//! Create-or-replace of a single entry.

use tracing::{debug, info};

use crate::core::domain::{SecretFields, SecretRecord};
use crate::core::materialize::materialize;
use crate::core::path::SecretPath;
use crate::core::resolve::find_entry;
use crate::core::store::{EntryId, GroupId, TreeStore};
use crate::error::StoreError;

/// Result of a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    /// Snapshot of the entry now at the path.
    pub record: SecretRecord,
    /// Whether the store was modified and saved.
    pub changed: bool,
}

/// Write one entry at `path`.
///
/// - Entry exists and `force` is false: nothing is touched, the current
///   entry is returned with `changed = false`.
/// - Entry exists and `force` is true: it is deleted and recreated from
///   `fields` alone (old properties are not carried over), then saved.
/// - Entry is absent: missing groups are created, the entry is created
///   from `fields`, then saved.
///
/// The entry is always titled with the path's terminal segment.
///
/// # Errors
///
/// Returns the store's error if any mutation or the save fails. Groups
/// created before the failure are left in place.
pub fn write<S: TreeStore + ?Sized>(
    store: &mut S,
    path: &SecretPath,
    fields: &SecretFields,
    force: bool,
) -> Result<WriteOutcome, StoreError> {
    let parent = if path.is_root_level() {
        store.root_group()
    } else {
        materialize(store, path.groups())?.group
    };

    match find_entry(&*store, path) {
        Some(existing) if !force => {
            debug!(path = %path, "entry exists, leaving it untouched");
            let record = snapshot(&*store, path, existing)?;
            Ok(WriteOutcome {
                record,
                changed: false,
            })
        }
        Some(existing) => {
            store.delete_entry(existing)?;
            let record = create(store, parent, path, fields)?;
            info!(path = %path, "entry replaced");
            Ok(WriteOutcome {
                record,
                changed: true,
            })
        }
        None => {
            let record = create(store, parent, path, fields)?;
            info!(path = %path, "entry created");
            Ok(WriteOutcome {
                record,
                changed: true,
            })
        }
    }
}

/// Whether [`write`] would modify the store, without touching it.
pub fn plan<S: TreeStore + ?Sized>(store: &S, path: &SecretPath, force: bool) -> bool {
    force || find_entry(store, path).is_none()
}

fn create<S: TreeStore + ?Sized>(
    store: &mut S,
    parent: GroupId,
    path: &SecretPath,
    fields: &SecretFields,
) -> Result<SecretRecord, StoreError> {
    let entry = store.add_entry(parent, path.name(), fields)?;
    for (key, value) in &fields.properties {
        store.set_property(entry, key, value)?;
    }
    store.save()?;

    snapshot(&*store, path, entry)
}

fn snapshot<S: TreeStore + ?Sized>(
    store: &S,
    path: &SecretPath,
    entry: EntryId,
) -> Result<SecretRecord, StoreError> {
    store
        .entry(entry)
        .map(|e| SecretRecord::from_entry(path.name(), e))
        .ok_or(StoreError::UnknownEntry(entry.0))
}
