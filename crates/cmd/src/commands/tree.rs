// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;

use anyhow::Result;
use nametree::Namespace;

/// Prints the whole namespace as a box-drawn tree
pub fn tree_command<W: Write>(ns: Namespace, mut output: W) -> Result<()> {
    write!(output, "{}", ns.render_tree(ns.root())?)?;
    ns.destroy();
    Ok(())
}
