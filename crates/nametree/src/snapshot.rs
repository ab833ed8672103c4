// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use crate::entry_kind::EntryKind;
use crate::error::Result;
use crate::namespace::{Listing, Namespace};

/// Every directory's listing keyed by its slash-joined path below the root.
///
/// The root is keyed by the empty string. Files never get a key.
pub type Snapshot = BTreeMap<String, Vec<Listing>>;

impl Namespace {
    pub fn snapshot(&self) -> Result<Snapshot> {
        let mut snapshot = Snapshot::new();
        let mut stack = vec![(self.root(), String::new())];

        while let Some((dir, path)) = stack.pop() {
            let entry = self.get(dir)?;
            for child in entry.children().iter().rev() {
                let child_entry = self.get(*child)?;
                if child_entry.is_dir() {
                    let child_path = if path.is_empty() {
                        child_entry.name().to_string()
                    } else {
                        format!("{}/{}", path, child_entry.name())
                    };
                    stack.push((*child, child_path));
                }
            }
            snapshot.insert(path, self.list(dir)?);
        }

        Ok(snapshot)
    }
}

/// Populates an empty namespace with a small demonstration tree:
///
/// ```text
/// Documents/
///     Work/  Personal/  notes.txt
/// Images/
///     Vacation/  photo1.jpg
/// readme.txt
/// ```
pub fn seed_sample(ns: &mut Namespace) -> Result<()> {
    let root = ns.root();
    let documents = ns.insert(root, "Documents", EntryKind::Directory)?;
    let images = ns.insert(root, "Images", EntryKind::Directory)?;
    ns.insert(root, "readme.txt", EntryKind::File)?;

    ns.insert(documents, "Work", EntryKind::Directory)?;
    ns.insert(documents, "Personal", EntryKind::Directory)?;
    ns.insert(documents, "notes.txt", EntryKind::File)?;

    ns.insert(images, "Vacation", EntryKind::Directory)?;
    ns.insert(images, "photo1.jpg", EntryKind::File)?;
    Ok(())
}
