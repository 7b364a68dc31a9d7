//! Tree stores.
//!
//! The engine reads and mutates the secret tree only through the
//! [`TreeStore`] trait. Two implementations ship with the crate:
//!
//! - [`Tree`]: an in-memory arena, whose `save` only counts flushes
//! - [`Database`]: a [`Tree`] loaded from and saved to an age-encrypted file
//!
//! ## Adding a New Store
//!
//! 1. Implement the `TreeStore` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use crate::core::domain::{Entry, SecretFields};
use crate::core::types::Segment;
use crate::error::StoreError;

mod database;
mod tree;

pub use database::Database;
pub use tree::Tree;

/// Handle to a group owned by a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub(crate) usize);

/// Handle to an entry owned by a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(pub(crate) usize);

/// Store primitives consumed by the engine.
///
/// Paths passed to the lookup methods are relative to the root group and
/// matched segment by segment with exact string equality. When siblings
/// share a name the first one wins.
pub trait TreeStore {
    /// The root group. Always exists.
    fn root_group(&self) -> GroupId;

    /// Find the group at an exact path. An empty path is the root group.
    fn find_group(&self, path: &[Segment]) -> Option<GroupId>;

    /// Find the entry at an exact path (groups followed by the entry title).
    fn find_entry(&self, path: &[Segment]) -> Option<EntryId>;

    /// Create a child group under `parent`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnknownGroup` if `parent` does not exist.
    fn add_group(&mut self, parent: GroupId, name: &str) -> Result<GroupId, StoreError>;

    /// Create an entry under `parent` from the standard fields.
    ///
    /// Custom properties in `fields` are not applied here; attach them with
    /// [`TreeStore::set_property`].
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnknownGroup` if `parent` does not exist.
    fn add_entry(
        &mut self,
        parent: GroupId,
        title: &str,
        fields: &SecretFields,
    ) -> Result<EntryId, StoreError>;

    /// Attach one custom property to an entry.
    fn set_property(&mut self, entry: EntryId, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove an entry from its group.
    fn delete_entry(&mut self, entry: EntryId) -> Result<(), StoreError>;

    /// Borrow an entry.
    fn entry(&self, entry: EntryId) -> Option<&Entry>;

    /// Direct entries of a group in enumeration order.
    fn group_entries(&self, group: GroupId) -> Vec<EntryId>;

    /// Full path of an entry (group names below the root, then its title).
    fn entry_path(&self, entry: EntryId) -> Option<Vec<Segment>>;

    /// Flush all pending changes to durable storage.
    fn save(&mut self) -> Result<(), StoreError>;
}
