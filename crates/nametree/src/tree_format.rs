// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Box-drawing rendering of a namespace subtree.
//!
//! ```
//! use nametree::{EntryKind, create_root};
//!
//! let mut ns = create_root();
//! let docs = ns.insert(ns.root(), "docs", EntryKind::Directory).unwrap();
//! ns.insert(docs, "a.txt", EntryKind::File).unwrap();
//! ns.insert(ns.root(), "b.txt", EntryKind::File).unwrap();
//!
//! let output = ns.render_tree(ns.root()).unwrap();
//! // DIRECTORY/
//! // ├─┬ docs/
//! // │ └── a.txt
//! // └── b.txt
//! assert!(output.contains("├─┬ docs/"));
//! ```

use std::slice;

use crate::error::Result;
use crate::namespace::{Entry, EntryId, Namespace};

/// `(connector, continuation)` for a child, by whether it has children and
/// whether it is the last of its siblings
fn connectors(has_children: bool, is_last: bool) -> (&'static str, char) {
    match (has_children, is_last) {
        (false, true) => ("└──", ' '),
        (false, false) => ("├──", '│'),
        (true, true) => ("└─┬", ' '),
        (true, false) => ("├─┬", '│'),
    }
}

fn push_label(output: &mut String, entry: &Entry) {
    output.push_str(entry.name());
    output.push_str(entry.kind().marker());
    output.push('\n');
}

impl Namespace {
    /// Renders `node` and everything below it, directories marked with `/`.
    ///
    /// Children nest under `├─┬`/`└─┬`, leaves use `├──`/`└──`. The walk
    /// keeps one pending sibling iterator per open level, so depth is
    /// bounded by the heap only.
    pub fn render_tree(&self, node: EntryId) -> Result<String> {
        let entry = self.get(node)?;
        let mut output = String::new();
        push_label(&mut output, entry);

        // One shared prefix; each level remembers the length it starts at
        let mut prefix = String::new();
        let mut stack: Vec<(slice::Iter<'_, EntryId>, usize)> =
            vec![(entry.children().iter(), 0)];

        while let Some((siblings, depth_len)) = stack.last_mut() {
            let Some(child) = siblings.next() else {
                stack.pop();
                continue;
            };
            let is_last = siblings.as_slice().is_empty();
            prefix.truncate(*depth_len);

            let child = self.get(*child)?;
            let has_children = !child.children().is_empty();
            let (connector, continuation) = connectors(has_children, is_last);

            output.push_str(&prefix);
            output.push_str(connector);
            output.push(' ');
            push_label(&mut output, child);

            if has_children {
                prefix.push(continuation);
                prefix.push(' ');
                stack.push((child.children().iter(), prefix.len()));
            }
        }

        Ok(output)
    }
}
