// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::namespace::EntryId;

pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors that can occur in namespace operations.
///
/// Every variant is recoverable: an operation that fails leaves the tree
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{name} already exists in {parent}")]
    Conflict { parent: String, name: String },

    #[error("{name} not found in {parent}")]
    NotFound { parent: String, name: String },

    /// The id does not refer to a live entry (never issued, or removed)
    #[error("No such entry: {0}")]
    StaleEntry(EntryId),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Selection {choice} is not between 1 and {count}")]
    InvalidSelection { choice: i64, count: usize },

    #[error("Directory discovery found more than {limit} directories")]
    TooManyResults { limit: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub fn conflict<P: AsRef<str>, N: AsRef<str>>(parent: P, name: N) -> Self {
        Error::Conflict {
            parent: parent.as_ref().into(),
            name: name.as_ref().into(),
        }
    }

    pub fn not_found<P: AsRef<str>, N: AsRef<str>>(parent: P, name: N) -> Self {
        Error::NotFound {
            parent: parent.as_ref().into(),
            name: name.as_ref().into(),
        }
    }

    pub fn stale_entry(id: EntryId) -> Self {
        Error::StaleEntry(id)
    }

    pub fn not_a_directory<S: AsRef<str>>(name: S) -> Self {
        Error::NotADirectory(name.as_ref().into())
    }

    pub fn invalid_name<N: AsRef<str>, R: Into<String>>(name: N, reason: R) -> Self {
        Error::InvalidName {
            name: name.as_ref().into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_selection(choice: i64, count: usize) -> Self {
        Error::InvalidSelection { choice, count }
    }

    pub fn too_many_results(limit: usize) -> Self {
        Error::TooManyResults { limit }
    }

    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Error::InvalidConfig(msg.into())
    }

    /// A name conflict leaves the tree as it was and is shown to the user
    /// as a warning; every other error is shown as an error.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self, Error::Conflict { .. })
    }
}
