//! In-memory arena tree.
//!
//! Groups are never removed, so group ids stay valid for the lifetime of
//! the tree. Deleted entries leave an empty slot behind.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{EntryId, GroupId, TreeStore};
use crate::core::constants::ROOT_GROUP;
use crate::core::domain::{Entry, SecretFields};
use crate::core::types::Segment;
use crate::error::StoreError;

#[derive(Debug, Clone)]
struct GroupNode {
    name: String,
    parent: Option<GroupId>,
    groups: Vec<GroupId>,
    entries: Vec<EntryId>,
}

#[derive(Debug, Clone)]
struct EntryNode {
    parent: GroupId,
    entry: Entry,
}

/// An in-memory secret tree.
#[derive(Debug, Clone)]
pub struct Tree {
    groups: Vec<GroupNode>,
    entries: Vec<Option<EntryNode>>,
    saves: usize,
}

/// Serialized form of a group and everything below it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct GroupDoc {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<Entry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GroupDoc>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Create a tree holding only an empty root group.
    pub fn new() -> Self {
        Self {
            groups: vec![GroupNode {
                name: ROOT_GROUP.to_string(),
                parent: None,
                groups: Vec::new(),
                entries: Vec::new(),
            }],
            entries: Vec::new(),
            saves: 0,
        }
    }

    /// Name of a group.
    pub fn group_name(&self, group: GroupId) -> Option<&str> {
        self.groups.get(group.0).map(|g| g.name.as_str())
    }

    /// Parent of a group; `None` for the root.
    pub fn group_parent(&self, group: GroupId) -> Option<GroupId> {
        self.groups.get(group.0).and_then(|g| g.parent)
    }

    /// Direct child groups in creation order.
    pub fn child_groups(&self, group: GroupId) -> Vec<GroupId> {
        self.groups
            .get(group.0)
            .map(|g| g.groups.clone())
            .unwrap_or_default()
    }

    /// Number of groups, root included.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of live entries.
    pub fn entry_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// How many times [`TreeStore::save`] has been called.
    pub fn saves(&self) -> usize {
        self.saves
    }

    fn child_group(&self, parent: GroupId, name: &str) -> Option<GroupId> {
        self.groups[parent.0]
            .groups
            .iter()
            .copied()
            .find(|g| self.groups[g.0].name == name)
    }

    fn group_mut(&mut self, group: GroupId) -> Result<&mut GroupNode, StoreError> {
        self.groups
            .get_mut(group.0)
            .ok_or(StoreError::UnknownGroup(group.0))
    }

    fn entry_node_mut(&mut self, entry: EntryId) -> Result<&mut EntryNode, StoreError> {
        self.entries
            .get_mut(entry.0)
            .and_then(Option::as_mut)
            .ok_or(StoreError::UnknownEntry(entry.0))
    }

    fn insert_entry(&mut self, parent: GroupId, entry: Entry) -> Result<EntryId, StoreError> {
        let id = EntryId(self.entries.len());
        self.group_mut(parent)?.entries.push(id);
        self.entries.push(Some(EntryNode { parent, entry }));
        Ok(id)
    }

    /// Rebuild a tree from its serialized form.
    pub(crate) fn from_doc(root: GroupDoc) -> Self {
        let mut tree = Self::new();
        tree.groups[0].name = root.name.clone();
        tree.load_group(tree.root_group(), root);
        tree
    }

    fn load_group(&mut self, id: GroupId, doc: GroupDoc) {
        for entry in doc.entries {
            let entry_id = EntryId(self.entries.len());
            self.groups[id.0].entries.push(entry_id);
            self.entries.push(Some(EntryNode { parent: id, entry }));
        }
        for child in doc.groups {
            let child_id = GroupId(self.groups.len());
            self.groups.push(GroupNode {
                name: child.name.clone(),
                parent: Some(id),
                groups: Vec::new(),
                entries: Vec::new(),
            });
            self.groups[id.0].groups.push(child_id);
            self.load_group(child_id, child);
        }
    }

    /// Serialize the whole tree, starting from the root group.
    pub(crate) fn to_doc(&self) -> GroupDoc {
        self.group_doc(self.root_group())
    }

    fn group_doc(&self, id: GroupId) -> GroupDoc {
        let node = &self.groups[id.0];
        GroupDoc {
            name: node.name.clone(),
            entries: node
                .entries
                .iter()
                .filter_map(|e| self.entry(*e).cloned())
                .collect(),
            groups: node.groups.iter().map(|g| self.group_doc(*g)).collect(),
        }
    }
}

impl TreeStore for Tree {
    fn root_group(&self) -> GroupId {
        GroupId(0)
    }

    fn find_group(&self, path: &[Segment]) -> Option<GroupId> {
        path.iter()
            .try_fold(self.root_group(), |group, name| self.child_group(group, name))
    }

    fn find_entry(&self, path: &[Segment]) -> Option<EntryId> {
        let (title, groups) = path.split_last()?;
        let group = self.find_group(groups)?;
        self.groups[group.0]
            .entries
            .iter()
            .copied()
            .find(|e| self.entry(*e).is_some_and(|entry| entry.title == *title))
    }

    fn add_group(&mut self, parent: GroupId, name: &str) -> Result<GroupId, StoreError> {
        let id = GroupId(self.groups.len());
        self.group_mut(parent)?.groups.push(id);
        self.groups.push(GroupNode {
            name: name.to_string(),
            parent: Some(parent),
            groups: Vec::new(),
            entries: Vec::new(),
        });
        trace!(group = name, parent = parent.0, "group added");
        Ok(id)
    }

    fn add_entry(
        &mut self,
        parent: GroupId,
        title: &str,
        fields: &SecretFields,
    ) -> Result<EntryId, StoreError> {
        let id = self.insert_entry(parent, Entry::new(title, fields))?;
        trace!(entry = title, parent = parent.0, "entry added");
        Ok(id)
    }

    fn set_property(&mut self, entry: EntryId, key: &str, value: &str) -> Result<(), StoreError> {
        self.entry_node_mut(entry)?.entry.set_property(key, value);
        Ok(())
    }

    fn delete_entry(&mut self, entry: EntryId) -> Result<(), StoreError> {
        let parent = self.entry_node_mut(entry)?.parent;
        self.group_mut(parent)?.entries.retain(|e| *e != entry);
        self.entries[entry.0] = None;
        trace!(entry = entry.0, "entry deleted");
        Ok(())
    }

    fn entry(&self, entry: EntryId) -> Option<&Entry> {
        self.entries
            .get(entry.0)
            .and_then(Option::as_ref)
            .map(|node| &node.entry)
    }

    fn group_entries(&self, group: GroupId) -> Vec<EntryId> {
        self.groups
            .get(group.0)
            .map(|g| g.entries.clone())
            .unwrap_or_default()
    }

    fn entry_path(&self, entry: EntryId) -> Option<Vec<Segment>> {
        let node = self.entries.get(entry.0)?.as_ref()?;

        let mut path = vec![node.entry.title.clone()];
        let mut current = node.parent;
        while let Some(parent) = self.group_parent(current) {
            path.push(self.groups[current.0].name.clone());
            current = parent;
        }
        path.reverse();
        Some(path)
    }

    fn save(&mut self) -> Result<(), StoreError> {
        self.saves += 1;
        Ok(())
    }
}
