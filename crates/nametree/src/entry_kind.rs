// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

/// Kind tag carried by every namespace entry.
///
/// Serialized in lowercase, matching the `type` field of exported listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Container that may hold child entries
    Directory,
    /// Leaf entry, never has children
    File,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Directory => "directory",
            EntryKind::File => "file",
        }
    }

    /// Marker appended to names when listing
    pub fn marker(&self) -> &'static str {
        match self {
            EntryKind::Directory => "/",
            EntryKind::File => "",
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "directory" => Ok(EntryKind::Directory),
            "file" => Ok(EntryKind::File),
            other => Err(format!("Unknown entry kind: {}", other)),
        }
    }
}
