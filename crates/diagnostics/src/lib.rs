// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Logging shared by the nametree crates.
//!
//! Output goes to stderr through `emit_term` and is selected with the
//! `NAMETREE_LOG` environment variable:
//! - `NAMETREE_LOG=off` (default) - no logs
//! - `NAMETREE_LOG=error|warn|info|debug` - that level and above
//!
//! Unknown values fall back to `info` with a bootstrap warning.

use std::sync::Once;

// Re-export emit so the macros resolve from any crate
pub use emit;

/// Environment variable consulted by [`init_diagnostics`].
pub const LOG_ENV: &str = "NAMETREE_LOG";

static INIT: Once = Once::new();

/// Parsed value of [`LOG_ENV`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSetting {
    Off,
    Min(emit::Level),
}

impl LogSetting {
    /// Parse a setting; `None` means the value was not recognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "off" => Some(LogSetting::Off),
            "debug" => Some(LogSetting::Min(emit::Level::Debug)),
            "info" => Some(LogSetting::Min(emit::Level::Info)),
            "warn" => Some(LogSetting::Min(emit::Level::Warn)),
            "error" => Some(LogSetting::Min(emit::Level::Error)),
            _ => None,
        }
    }
}

/// Initialize diagnostics from the `NAMETREE_LOG` environment variable.
///
/// Call once at startup. Later calls are ignored.
pub fn init_diagnostics() {
    INIT.call_once(|| {
        let raw = std::env::var(LOG_ENV).unwrap_or_else(|_| "off".to_string());

        let level = match LogSetting::parse(&raw) {
            Some(LogSetting::Off) => return,
            Some(LogSetting::Min(level)) => level,
            None => {
                // Bootstrap warning, the emitter is not running yet
                eprintln!("Warning: Unknown {} value '{}', using 'info'", LOG_ENV, raw);
                emit::Level::Info
            }
        };

        let rt = emit::setup()
            .emit_to(emit_term::stderr())
            .emit_when(emit::level::min_filter(level))
            .init();

        // The runtime lives for the rest of the process
        std::mem::forget(rt);
    });
}

/// Log basic operations (entries created, entries removed, session start)
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Log detailed diagnostics (lookups, traversal sizes, navigation choices)
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Log recoverable conditions (name conflicts, missing entries)
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

/// Log failures that stop an operation
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_safe_to_call_multiple_times() {
        init_diagnostics();
        init_diagnostics();
    }

    #[test]
    fn test_parse_settings() {
        assert_eq!(LogSetting::parse("off"), Some(LogSetting::Off));
        assert_eq!(LogSetting::parse(""), Some(LogSetting::Off));
        assert_eq!(
            LogSetting::parse("DEBUG"),
            Some(LogSetting::Min(emit::Level::Debug))
        );
        assert_eq!(
            LogSetting::parse(" warn "),
            Some(LogSetting::Min(emit::Level::Warn))
        );
        assert_eq!(LogSetting::parse("verbose"), None);
    }

    #[test]
    fn test_macros_compile() {
        log_info!("Created {name}", name: "docs");
        log_debug!("Visited {count} entries", count: 3);
        log_warn!("Warning message");
        log_error!("Error message");
    }
}
