// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::{Error, Result};
use crate::namespace::{EntryId, Namespace};
use diagnostics::log_debug;

/// Targets reachable from a position, numbered from 1 for the menu.
///
/// Holds every directory below the position, then its parent (if any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationChoices {
    current: EntryId,
    candidates: Vec<EntryId>,
}

impl NavigationChoices {
    pub fn current(&self) -> EntryId {
        self.current
    }

    /// True for a bare root: nothing to move to
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn candidates(&self) -> &[EntryId] {
        &self.candidates
    }

    /// `(number, id)` pairs, numbering from 1
    pub fn iter(&self) -> impl Iterator<Item = (usize, EntryId)> + '_ {
        self.candidates.iter().enumerate().map(|(i, id)| (i + 1, *id))
    }

    /// Maps a 1-based menu number to its target
    pub fn select(&self, choice: i64) -> Result<EntryId> {
        usize::try_from(choice)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| self.candidates.get(index).copied())
            .ok_or_else(|| Error::invalid_selection(choice, self.candidates.len()))
    }

    /// Like [`select`](Self::select), but an invalid choice means staying put
    pub fn select_or_stay(&self, choice: i64) -> EntryId {
        match self.select(choice) {
            Ok(target) => target,
            Err(_) => {
                log_debug!("Staying in place for choice {choice}", choice: choice);
                self.current
            }
        }
    }
}

impl Namespace {
    /// Builds the menu of targets reachable from `current`
    pub fn navigation_choices(&self, current: EntryId) -> Result<NavigationChoices> {
        let mut candidates = self.collect_directories(current)?;
        if let Some(parent) = self.get(current)?.parent() {
            candidates.push(parent);
        }
        Ok(NavigationChoices {
            current,
            candidates,
        })
    }

    /// Returns the new position after picking `choice` from `current`'s menu.
    ///
    /// Zero, out-of-range choices and an empty menu all leave the position
    /// where it was.
    pub fn navigate(&self, current: EntryId, choice: i64) -> Result<EntryId> {
        Ok(self.navigation_choices(current)?.select_or_stay(choice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry_kind::EntryKind;
    use crate::namespace::create_root;

    #[test]
    fn test_navigate_from_leaf_directory() {
        let mut ns = create_root();
        let root = ns.root();
        let dir_a = ns.insert(root, "dirA", EntryKind::Directory).unwrap();

        let choices = ns.navigation_choices(dir_a).unwrap();
        assert_eq!(choices.candidates(), &[root]);

        assert_eq!(ns.navigate(dir_a, 1).unwrap(), root);
        assert_eq!(ns.navigate(dir_a, 0).unwrap(), dir_a);
        assert_eq!(ns.navigate(dir_a, 2).unwrap(), dir_a);
        assert_eq!(ns.navigate(dir_a, -1).unwrap(), dir_a);
    }

    #[test]
    fn test_parent_listed_last() {
        let mut ns = create_root();
        let root = ns.root();
        let a = ns.insert(root, "a", EntryKind::Directory).unwrap();
        let b = ns.insert(a, "b", EntryKind::Directory).unwrap();
        let c = ns.insert(b, "c", EntryKind::Directory).unwrap();

        let choices = ns.navigation_choices(a).unwrap();
        let numbered: Vec<_> = choices.iter().collect();
        assert_eq!(numbered, vec![(1, b), (2, c), (3, root)]);
        assert_eq!(ns.navigate(a, 2).unwrap(), c);
    }

    #[test]
    fn test_bare_root_has_no_choices() {
        let mut ns = create_root();
        let root = ns.root();
        ns.insert(root, "only-a-file", EntryKind::File).unwrap();

        let choices = ns.navigation_choices(root).unwrap();
        assert!(choices.is_empty());
        assert_eq!(ns.navigate(root, 1).unwrap(), root);
    }

    #[test]
    fn test_select_reports_invalid_choice() {
        let mut ns = create_root();
        let a = ns.insert(ns.root(), "a", EntryKind::Directory).unwrap();
        let choices = ns.navigation_choices(a).unwrap();

        assert_eq!(choices.select(0), Err(Error::invalid_selection(0, 1)));
        assert_eq!(choices.select(5), Err(Error::invalid_selection(5, 1)));
        assert_eq!(choices.select(1), Ok(ns.root()));
    }

    #[test]
    fn test_capacity_error_propagates() {
        let config = crate::NamespaceConfig {
            discovery_limit: 1,
            ..Default::default()
        };
        let mut ns = Namespace::with_config(config).unwrap();
        let root = ns.root();
        ns.insert(root, "a", EntryKind::Directory).unwrap();
        ns.insert(root, "b", EntryKind::Directory).unwrap();

        assert_eq!(ns.navigate(root, 1), Err(Error::too_many_results(1)));
    }
}
