//! Group lookup and creation along a path.
//!
//! Given the group segments of a nested path, find the deepest group that
//! already exists and create whatever is missing below it, each new group
//! becoming the parent of the next.

use tracing::debug;

use crate::core::store::{GroupId, TreeStore};
use crate::core::types::Segment;
use crate::error::StoreError;

/// Deepest existing group along a sequence of group segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Located {
    /// The deepest group found (the root if none of the segments exist).
    pub group: GroupId,
    /// Index of the first segment with no group, `None` if all exist.
    pub missing_from: Option<usize>,
}

/// Result of a materialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Materialized {
    /// The group named by the full segment sequence.
    pub group: GroupId,
    /// Number of groups created to get there.
    pub created: usize,
}

/// Walk `groups` from the root without modifying the store.
pub fn locate<S: TreeStore + ?Sized>(store: &S, groups: &[Segment]) -> Located {
    groups
        .iter()
        .enumerate()
        .try_fold(store.root_group(), |parent, (depth, _)| {
            store.find_group(&groups[..=depth]).ok_or(Located {
                group: parent,
                missing_from: Some(depth),
            })
        })
        .map_or_else(
            |located| located,
            |group| Located {
                group,
                missing_from: None,
            },
        )
}

/// Ensure every group in `groups` exists, creating the missing ones.
///
/// Existing groups are never renamed or moved. Running this again on an
/// already materialized sequence creates nothing and returns the same group.
///
/// # Errors
///
/// Returns the store's error if a group cannot be created.
pub fn materialize<S: TreeStore + ?Sized>(
    store: &mut S,
    groups: &[Segment],
) -> Result<Materialized, StoreError> {
    let Located {
        group,
        missing_from,
    } = locate(store, groups);

    let missing = missing_from.map(|i| &groups[i..]).unwrap_or_default();
    let group = missing
        .iter()
        .try_fold(group, |parent, name| store.add_group(parent, name))?;

    if !missing.is_empty() {
        debug!(
            depth = groups.len(),
            created = missing.len(),
            "materialized groups"
        );
    }

    Ok(Materialized {
        group,
        created: missing.len(),
    })
}
