//! Exact entry lookup.

use crate::core::path::SecretPath;
use crate::core::store::{EntryId, TreeStore};

/// Find the entry at exactly `path`.
///
/// Every segment must match by exact, case-sensitive name; there is no
/// prefix or fuzzy fallback. `None` is a normal outcome.
pub fn find_entry<S: TreeStore + ?Sized>(store: &S, path: &SecretPath) -> Option<EntryId> {
    store.find_entry(path.segments())
}
