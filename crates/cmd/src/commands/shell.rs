// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{BufRead, Write};

use anyhow::Result;
use diagnostics::log_info;
use nametree::Namespace;

use crate::session::Session;

/// Runs the interactive menu until Exit or end of input
pub fn shell_command<R: BufRead, W: Write>(ns: Namespace, input: R, output: W) -> Result<()> {
    let destroyed = Session::new(ns, input, output).run()?;
    log_info!("Session ended, {count} entries released", count: destroyed);
    Ok(())
}
