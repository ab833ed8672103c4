// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;

use crate::config::NamespaceConfig;
use crate::entry_kind::EntryKind;
use crate::error::{Error, Result};
use crate::name::Name;
use diagnostics::{log_debug, log_info, log_warn};

const ROOT_ID: EntryId = EntryId {
    index: 0,
    generation: 0,
};

/// Identifier of an entry inside one [`Namespace`].
///
/// Slots are reused after removal, but each reuse bumps the slot's
/// generation, so an id kept past the removal of its entry resolves to
/// [`Error::StaleEntry`] instead of to whatever took its place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId {
    index: usize,
    generation: u32,
}

impl EntryId {
    pub fn is_root(&self) -> bool {
        *self == ROOT_ID
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}.{}", self.index, self.generation)
    }
}

/// One node of the namespace
#[derive(Debug, Clone)]
pub struct Entry {
    name: Name,
    kind: EntryKind,
    parent: Option<EntryId>,
    children: Vec<EntryId>,
}

impl Entry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind.is_directory()
    }

    /// Owning directory; `None` only for the root
    pub fn parent(&self) -> Option<EntryId> {
        self.parent
    }

    /// Children in insertion order
    pub fn children(&self) -> &[EntryId] {
        &self.children
    }
}

/// One line of a directory listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.name, self.kind.marker())
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    entry: Option<Entry>,
}

/// Arena owning every entry of the tree.
///
/// Parents refer to children, and children to parents, by [`EntryId`] only;
/// the arena is the single owner. Removing an entry vacates its slot and the
/// slots of its whole subtree, and vacated slots are handed out again by
/// later inserts.
#[derive(Debug, Clone)]
pub struct Namespace {
    slots: Vec<Slot>,
    free: Vec<usize>,
    live: usize,
    config: NamespaceConfig,
}

/// Creates a namespace holding only the root directory, with default settings
#[must_use]
pub fn create_root() -> Namespace {
    Namespace::new()
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}

impl Namespace {
    /// Creates a namespace with the default configuration
    #[must_use]
    pub fn new() -> Self {
        let config = NamespaceConfig::default();
        let root = Name(config.root_name.clone());
        Self::with_root(root, config)
    }

    /// Creates a namespace after validating `config`
    pub fn with_config(config: NamespaceConfig) -> Result<Self> {
        config.validate()?;
        let root = config.root()?;
        Ok(Self::with_root(root, config))
    }

    fn with_root(root: Name, config: NamespaceConfig) -> Self {
        let root = Entry {
            name: root,
            kind: EntryKind::Directory,
            parent: None,
            children: Vec::new(),
        };
        Self {
            slots: vec![Slot {
                generation: 0,
                entry: Some(root),
            }],
            free: Vec::new(),
            live: 1,
            config,
        }
    }

    pub fn config(&self) -> &NamespaceConfig {
        &self.config
    }

    /// The root directory
    pub fn root(&self) -> EntryId {
        ROOT_ID
    }

    /// Number of live entries, root included
    pub fn len(&self) -> usize {
        self.live
    }

    /// Always false: the root cannot be removed
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.get(id).is_ok()
    }

    pub fn get(&self, id: EntryId) -> Result<&Entry> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.entry.as_ref())
            .ok_or_else(|| Error::stale_entry(id))
    }

    fn get_mut(&mut self, id: EntryId) -> Result<&mut Entry> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.entry.as_mut())
            .ok_or_else(|| Error::stale_entry(id))
    }

    /// Stores `entry` in a vacated slot if there is one, else a new slot
    fn allocate(&mut self, entry: Entry) -> EntryId {
        let reused = self
            .free
            .pop()
            .and_then(|index| self.slots.get_mut(index).map(|slot| (index, slot)));

        match reused {
            Some((index, slot)) => {
                slot.entry = Some(entry);
                EntryId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = self.slots.len();
                self.slots.push(Slot {
                    generation: 0,
                    entry: Some(entry),
                });
                EntryId {
                    index,
                    generation: 0,
                }
            }
        }
    }

    /// Empties the slot behind `id` and retires its generation
    fn vacate(&mut self, id: EntryId) -> bool {
        let Some(slot) = self.slots.get_mut(id.index) else {
            return false;
        };
        if slot.generation != id.generation || slot.entry.take().is_none() {
            return false;
        }
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        true
    }

    // Position of the child named `name` in `parent`'s children
    fn position_of(&self, parent: &Entry, name: &str) -> Option<usize> {
        parent
            .children
            .iter()
            .position(|child| self.get(*child).is_ok_and(|entry| entry.name == name))
    }

    /// Looks up an immediate child by exact name
    pub fn find_child(&self, parent: EntryId, name: &str) -> Result<Option<EntryId>> {
        let dir = self.get(parent)?;
        Ok(self.position_of(dir, name).map(|pos| dir.children[pos]))
    }

    /// Adds a new entry named `name` under the directory `parent`.
    ///
    /// The new entry is appended after the existing children. A sibling with
    /// the same name, of either kind, makes this a no-op that returns
    /// [`Error::Conflict`].
    pub fn insert(&mut self, parent: EntryId, name: &str, kind: EntryKind) -> Result<EntryId> {
        let name = Name::parse(name, self.config.max_name_len)?;

        let dir = self.get(parent)?;
        if !dir.is_dir() {
            return Err(Error::not_a_directory(dir.name()));
        }
        if self.position_of(dir, &name).is_some() {
            let (dir_name, shown) = (dir.name(), name.as_str());
            log_warn!("{name} already exists in {parent}", name: shown, parent: dir_name);
            return Err(Error::conflict(dir_name, &name));
        }

        let (kind_str, shown) = (kind.as_str(), name.as_str());
        log_debug!("Inserting {kind} {name}", kind: kind_str, name: shown);
        let id = self.allocate(Entry {
            name,
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.get_mut(parent)?.children.push(id);
        self.live += 1;
        Ok(id)
    }

    /// Unlinks the child named `name` from `parent` and destroys its subtree.
    ///
    /// Returns how many entries were destroyed (the child plus all of its
    /// descendants). The remaining siblings keep their order.
    pub fn remove(&mut self, parent: EntryId, name: &str) -> Result<usize> {
        let dir = self.get(parent)?;
        let Some(pos) = self.position_of(dir, name) else {
            let dir_name = dir.name();
            log_debug!("{name} not found in {parent}", name: name, parent: dir_name);
            return Err(Error::not_found(dir_name, name));
        };

        let child = self.get_mut(parent)?.children.remove(pos);
        let destroyed = self.destroy_subtree(child);
        log_debug!("Removed {name} ({count} entries)", name: name, count: destroyed);
        Ok(destroyed)
    }

    /// Vacates `id` and every descendant, children before their parent.
    ///
    /// The caller has already unlinked `id` from its parent, if any.
    fn destroy_subtree(&mut self, id: EntryId) -> usize {
        let mut destroyed = 0;
        let mut stack = vec![(id, false)];

        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                if self.vacate(id) {
                    destroyed += 1;
                }
                continue;
            }

            stack.push((id, true));
            if let Ok(entry) = self.get(id) {
                stack.extend(entry.children.iter().rev().map(|child| (*child, false)));
            }
        }

        self.live -= destroyed;
        destroyed
    }

    /// Tears down the whole tree, root included, returning the entry count
    pub fn destroy(mut self) -> usize {
        let destroyed = self.destroy_subtree(ROOT_ID);
        log_info!("Destroyed namespace with {count} entries", count: destroyed);
        destroyed
    }

    /// Immediate children of `node` in insertion order.
    ///
    /// A file, like an empty directory, lists as nothing.
    pub fn list(&self, node: EntryId) -> Result<Vec<Listing>> {
        let entry = self.get(node)?;
        entry
            .children
            .iter()
            .map(|child| {
                let child = self.get(*child)?;
                Ok(Listing {
                    name: child.name().to_string(),
                    kind: child.kind(),
                })
            })
            .collect()
    }

    /// Names from just below the root down to `id`; empty for the root
    pub fn path_of(&self, id: EntryId) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut cursor = self.get(id)?;
        while let Some(parent) = cursor.parent {
            names.push(cursor.name().to_string());
            cursor = self.get(parent)?;
        }
        names.reverse();
        Ok(names)
    }

    /// `path_of` joined with `/`; the root displays as `/`
    pub fn display_path(&self, id: EntryId) -> Result<String> {
        Ok(format!("/{}", self.path_of(id)?.join("/")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_shape() {
        let ns = create_root();
        let root = ns.get(ns.root()).unwrap();
        assert_eq!(root.name(), "DIRECTORY");
        assert_eq!(root.kind(), EntryKind::Directory);
        assert_eq!(root.parent(), None);
        assert!(root.children().is_empty());
        assert_eq!(ns.len(), 1);
        assert!(ns.root().is_root());
    }

    #[test]
    fn test_insert_appends_in_order() {
        let mut ns = create_root();
        let root = ns.root();
        let b = ns.insert(root, "b", EntryKind::File).unwrap();
        let a = ns.insert(root, "a", EntryKind::Directory).unwrap();

        assert_eq!(ns.get(root).unwrap().children(), &[b, a]);
        assert_eq!(ns.get(a).unwrap().parent(), Some(root));
        assert_eq!(ns.len(), 3);
    }

    #[test]
    fn test_conflict_leaves_tree_unchanged() {
        let mut ns = create_root();
        let root = ns.root();
        ns.insert(root, "docs", EntryKind::Directory).unwrap();

        let result = ns.insert(root, "docs", EntryKind::File);
        assert_eq!(result, Err(Error::conflict("DIRECTORY", "docs")));
        assert_eq!(ns.len(), 2);

        let names: Vec<_> = ns.list(root).unwrap().into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["docs"]);
    }

    #[test]
    fn test_insert_under_file_rejected() {
        let mut ns = create_root();
        let file = ns.insert(ns.root(), "a.txt", EntryKind::File).unwrap();

        let result = ns.insert(file, "inner", EntryKind::File);
        assert_eq!(result, Err(Error::not_a_directory("a.txt")));
        assert!(ns.get(file).unwrap().children().is_empty());
    }

    #[test]
    fn test_invalid_name_checked_first() {
        let mut ns = create_root();
        let result = ns.insert(ns.root(), "", EntryKind::File);
        assert!(matches!(result, Err(Error::InvalidName { .. })));
        assert_eq!(ns.len(), 1);
    }

    #[test]
    fn test_remove_preserves_sibling_order() {
        let mut ns = create_root();
        let root = ns.root();
        let a = ns.insert(root, "a", EntryKind::File).unwrap();
        ns.insert(root, "b", EntryKind::File).unwrap();
        let c = ns.insert(root, "c", EntryKind::File).unwrap();

        assert_eq!(ns.remove(root, "b").unwrap(), 1);
        assert_eq!(ns.get(root).unwrap().children(), &[a, c]);
    }

    #[test]
    fn test_remove_destroys_subtree() {
        let mut ns = create_root();
        let root = ns.root();
        let a = ns.insert(root, "a", EntryKind::Directory).unwrap();
        let b = ns.insert(a, "b", EntryKind::Directory).unwrap();
        let c = ns.insert(b, "c", EntryKind::File).unwrap();
        let keep = ns.insert(root, "keep", EntryKind::File).unwrap();

        assert_eq!(ns.remove(root, "a").unwrap(), 3);
        for id in [a, b, c] {
            assert!(!ns.contains(id));
            assert_eq!(ns.get(id).unwrap_err(), Error::stale_entry(id));
        }
        assert!(ns.contains(keep));
        assert_eq!(ns.len(), 2);
    }

    #[test]
    fn test_remove_twice_is_not_found() {
        let mut ns = create_root();
        let root = ns.root();
        ns.insert(root, "x", EntryKind::File).unwrap();

        assert_eq!(ns.remove(root, "x"), Ok(1));
        assert_eq!(ns.remove(root, "x"), Err(Error::not_found("DIRECTORY", "x")));
    }

    #[test]
    fn test_reused_slot_gets_new_generation() {
        let mut ns = create_root();
        let root = ns.root();
        let first = ns.insert(root, "x", EntryKind::File).unwrap();
        ns.remove(root, "x").unwrap();
        let second = ns.insert(root, "y", EntryKind::File).unwrap();

        assert_eq!(second.index, first.index);
        assert_ne!(first, second);
        assert!(!ns.contains(first));
        assert_eq!(ns.get(first).unwrap_err(), Error::stale_entry(first));
        assert_eq!(ns.get(second).unwrap().name(), "y");
    }

    #[test]
    fn test_churn_keeps_arena_bounded() {
        let mut ns = create_root();
        let root = ns.root();
        for _ in 0..1_000 {
            let dir = ns.insert(root, "tmp", EntryKind::Directory).unwrap();
            ns.insert(dir, "a", EntryKind::File).unwrap();
            ns.insert(dir, "b", EntryKind::File).unwrap();
            assert_eq!(ns.remove(root, "tmp").unwrap(), 3);
        }

        assert_eq!(ns.len(), 1);
        assert_eq!(ns.slots.len(), 4);
    }

    #[test]
    fn test_entry_id_display() {
        let mut ns = create_root();
        let root = ns.root();
        assert_eq!(root.to_string(), "#0.0");

        ns.insert(root, "x", EntryKind::File).unwrap();
        ns.remove(root, "x").unwrap();
        let reused = ns.insert(root, "x", EntryKind::File).unwrap();
        assert_eq!(reused.to_string(), "#1.1");
    }

    #[test]
    fn test_list_marks_directories() {
        let mut ns = create_root();
        let root = ns.root();
        ns.insert(root, "docs", EntryKind::Directory).unwrap();
        ns.insert(root, "a.txt", EntryKind::File).unwrap();

        let rendered: Vec<_> = ns.list(root).unwrap().iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["docs/", "a.txt"]);
    }

    #[test]
    fn test_list_empty_and_file() {
        let mut ns = create_root();
        assert!(ns.list(ns.root()).unwrap().is_empty());

        let file = ns.insert(ns.root(), "f", EntryKind::File).unwrap();
        assert!(ns.list(file).unwrap().is_empty());
    }

    #[test]
    fn test_paths() {
        let mut ns = create_root();
        let a = ns.insert(ns.root(), "a", EntryKind::Directory).unwrap();
        let b = ns.insert(a, "b", EntryKind::Directory).unwrap();

        assert_eq!(ns.path_of(b).unwrap(), vec!["a", "b"]);
        assert_eq!(ns.display_path(b).unwrap(), "/a/b");
        assert_eq!(ns.display_path(ns.root()).unwrap(), "/");
    }

    #[test]
    fn test_find_child() {
        let mut ns = create_root();
        let a = ns.insert(ns.root(), "a", EntryKind::Directory).unwrap();

        assert_eq!(ns.find_child(ns.root(), "a").unwrap(), Some(a));
        assert_eq!(ns.find_child(ns.root(), "A").unwrap(), None);
    }

    #[test]
    fn test_destroy_counts_everything() {
        let mut ns = create_root();
        let a = ns.insert(ns.root(), "a", EntryKind::Directory).unwrap();
        ns.insert(a, "b", EntryKind::File).unwrap();
        ns.insert(ns.root(), "c", EntryKind::File).unwrap();

        assert_eq!(ns.destroy(), 4);
    }

    #[test]
    fn test_custom_root_name() {
        let config = NamespaceConfig {
            root_name: "ROOT".to_string(),
            ..Default::default()
        };
        let ns = Namespace::with_config(config).unwrap();
        assert_eq!(ns.get(ns.root()).unwrap().name(), "ROOT");
    }
}
