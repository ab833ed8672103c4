// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::name::{DEFAULT_MAX_NAME_LEN, Name};

/// Name given to the root directory unless configured otherwise
pub const DEFAULT_ROOT_NAME: &str = "DIRECTORY";

/// Maximum number of directories a single discovery may return
pub const DEFAULT_DISCOVERY_LIMIT: usize = 100;

/// Tunables for a [`crate::Namespace`].
///
/// Every field has a default, so an empty YAML document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamespaceConfig {
    /// Name of the root directory
    pub root_name: String,

    /// Longest accepted entry name, in characters
    pub max_name_len: usize,

    /// Cap on the result of `collect_directories`
    pub discovery_limit: usize,
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self {
            root_name: DEFAULT_ROOT_NAME.to_string(),
            max_name_len: DEFAULT_MAX_NAME_LEN,
            discovery_limit: DEFAULT_DISCOVERY_LIMIT,
        }
    }
}

impl NamespaceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_name_len == 0 {
            return Err(Error::invalid_config("max_name_len must be greater than 0"));
        }
        if self.discovery_limit == 0 {
            return Err(Error::invalid_config(
                "discovery_limit must be greater than 0",
            ));
        }
        self.root()?;
        Ok(())
    }

    /// The root name, validated against the configured length limit
    pub(crate) fn root(&self) -> Result<Name> {
        Name::parse(&self.root_name, self.max_name_len)
    }
}
