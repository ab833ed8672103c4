// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory hierarchical namespace.
//!
//! A [`Namespace`] is an arena of directory and file entries rooted at a
//! single directory. Entries are addressed by [`EntryId`] and by a single
//! name inside a given directory; there is no path parsing.

mod config;
mod discovery;
mod entry_kind;
mod error;
mod name;
mod namespace;
mod navigate;
mod snapshot;
mod tree_format;

pub use config::{DEFAULT_DISCOVERY_LIMIT, DEFAULT_ROOT_NAME, NamespaceConfig};
pub use entry_kind::EntryKind;
pub use error::{Error, Result};
pub use name::{DEFAULT_MAX_NAME_LEN, Name};
pub use namespace::{Entry, EntryId, Listing, Namespace, create_root};
pub use navigate::NavigationChoices;
pub use snapshot::{Snapshot, seed_sample};

#[cfg(test)]
mod tests;
