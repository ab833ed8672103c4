// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;

use anyhow::{Context, Result};
use nametree::Namespace;

/// Writes the directory-keyed JSON snapshot of the namespace
pub fn export_command<W: Write>(ns: Namespace, pretty: bool, mut output: W) -> Result<()> {
    let snapshot = ns.snapshot()?;
    let json = if pretty {
        serde_json::to_string_pretty(&snapshot)
    } else {
        serde_json::to_string(&snapshot)
    }
    .with_context(|| "Failed to serialize snapshot")?;

    writeln!(output, "{}", json)?;
    ns.destroy();
    Ok(())
}
