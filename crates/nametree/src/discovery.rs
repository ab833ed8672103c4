// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::{Error, Result};
use crate::namespace::{EntryId, Namespace};
use diagnostics::log_debug;

impl Namespace {
    /// Every directory nested anywhere below `node`, `node` itself excluded.
    ///
    /// Depth-first pre-order with siblings in insertion order: a directory is
    /// followed by its own directory descendants before its next sibling.
    /// Files are visited but never collected.
    ///
    /// Fails with [`Error::TooManyResults`] rather than truncating when more
    /// than the configured `discovery_limit` directories exist.
    pub fn collect_directories(&self, node: EntryId) -> Result<Vec<EntryId>> {
        let limit = self.config().discovery_limit;
        let start = self.get(node)?;

        let mut found = Vec::new();
        let mut stack: Vec<EntryId> = start.children().iter().rev().copied().collect();
        let mut visited = 0usize;

        while let Some(id) = stack.pop() {
            let entry = self.get(id)?;
            visited += 1;
            if entry.is_dir() {
                if found.len() == limit {
                    return Err(Error::too_many_results(limit));
                }
                found.push(id);
            }
            stack.extend(entry.children().iter().rev().copied());
        }

        let dirs = found.len();
        log_debug!(
            "Discovered {dirs} directories in {visited} entries",
            dirs: dirs,
            visited: visited
        );
        Ok(found)
    }
}
