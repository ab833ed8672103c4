// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use nametree::NamespaceConfig;
use std::path::Path;

/// Load namespace settings from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<NamespaceConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

    let config = parse_config(&content)?;
    let shown = path.as_ref().display().to_string();
    diagnostics::log_info!("Loaded config from {path}", path: shown);
    Ok(config)
}

/// Parse and validate a YAML document; an empty document means defaults
pub fn parse_config(content: &str) -> Result<NamespaceConfig> {
    let config: NamespaceConfig = if content.trim().is_empty() {
        NamespaceConfig::default()
    } else {
        serde_yaml_ng::from_str(content).with_context(|| "Failed to parse YAML configuration")?
    };

    config
        .validate()
        .with_context(|| "Invalid namespace configuration")?;
    Ok(config)
}
