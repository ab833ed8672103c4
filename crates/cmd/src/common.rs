// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use nametree::{Namespace, NamespaceConfig, seed_sample};

use crate::config::load_config;

/// Environment variable naming a YAML config file
pub const CONFIG_ENV: &str = "NAMETREE_CONFIG";

/// The config path from the command line, falling back to `NAMETREE_CONFIG`
pub fn config_path_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path.or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from))
}

/// Builds the namespace a command starts from
pub fn open_namespace(config_path: Option<PathBuf>, seed: bool) -> Result<Namespace> {
    let config = match config_path_with_override(config_path) {
        Some(path) => load_config(path)?,
        None => NamespaceConfig::default(),
    };

    let mut ns = Namespace::with_config(config)?;
    if seed {
        seed_sample(&mut ns)?;
    }
    Ok(ns)
}
