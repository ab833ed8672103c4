// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::{Error, Result};
use std::ops::Deref;

/// Default maximum name length, in characters
pub const DEFAULT_MAX_NAME_LEN: usize = 49;

/// A validated entry name.
///
/// Names are non-empty, at most the configured number of characters, and
/// contain neither `/` (the listing marker) nor NUL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(pub(crate) String);

impl Name {
    pub fn parse<S: AsRef<str>>(name: S, max_len: usize) -> Result<Self> {
        let name = name.as_ref();
        if name.is_empty() {
            return Err(Error::invalid_name(name, "name is empty"));
        }
        if name.contains('/') {
            return Err(Error::invalid_name(name, "name contains '/'"));
        }
        if name.contains('\0') {
            return Err(Error::invalid_name(name, "name contains NUL"));
        }
        let len = name.chars().count();
        if len > max_len {
            return Err(Error::invalid_name(
                name,
                format!("name is {} characters, limit is {}", len, max_len),
            ));
        }
        Ok(Name(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Name {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
