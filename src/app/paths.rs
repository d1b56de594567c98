// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--config-dir`, `--results-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`AGROSCAN_CONFIG_DIR`, `AGROSCAN_RESULTS_DIR`)
//! 4. **Configured value** (results dir only, from `[analysis] results-dir`)
//! 5. **Platform default** - via the `dirs` crate
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir, flags.results_dir);
//! ```

use crate::config::{Config, DEFAULT_RESULTS_DIR_NAME};
use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "AgroScan";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "AGROSCAN_CONFIG_DIR";

/// Environment variable to override the results directory.
pub const ENV_RESULTS_DIR: &str = "AGROSCAN_RESULTS_DIR";

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global CLI override for the results directory (set once at startup).
static CLI_RESULTS_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for the config and results directories.
///
/// Must be called once at application startup, before any path resolution.
///
/// # Panics
///
/// Panics if called more than once (OnceLock can only be set once).
pub fn init_cli_overrides(config_dir: Option<String>, results_dir: Option<String>) {
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
    CLI_RESULTS_DIR
        .set(results_dir.map(PathBuf::from))
        .expect("CLI results dir override already initialized");
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn get_cli_results_dir() -> Option<PathBuf> {
    CLI_RESULTS_DIR.get().and_then(Clone::clone)
}

fn env_dir(var: &str) -> Option<PathBuf> {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}

/// Returns the directory holding `settings.toml`.
pub fn get_config_dir() -> Option<PathBuf> {
    get_config_dir_with_override(None)
}

/// Returns the config directory with an optional explicit override
/// (highest priority, used by tests).
pub fn get_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Some(path) = env_dir(ENV_CONFIG_DIR) {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the directory the analysis pipeline renders results into.
pub fn get_results_dir(config: &Config) -> Option<PathBuf> {
    get_results_dir_with_override(config, None)
}

/// Returns the results directory with an optional explicit override
/// (highest priority, used by tests).
pub fn get_results_dir_with_override(
    config: &Config,
    override_path: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_results_dir() {
        return Some(path);
    }

    if let Some(path) = env_dir(ENV_RESULTS_DIR) {
        return Some(path);
    }

    if let Some(path) = &config.analysis.results_dir {
        return Some(path.clone());
    }

    dirs::data_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(DEFAULT_RESULTS_DIR_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins_for_config_dir() {
        let custom = PathBuf::from("/tmp/agroscan-test-config");
        let resolved = get_config_dir_with_override(Some(custom.clone()));
        assert_eq!(resolved, Some(custom));
    }

    #[test]
    fn configured_results_dir_is_used() {
        let mut config = Config::default();
        config.analysis.results_dir = Some(PathBuf::from("/srv/pipeline/out"));

        // No explicit/CLI/env override in the test environment.
        let resolved = get_results_dir_with_override(&config, None);
        assert_eq!(resolved, Some(PathBuf::from("/srv/pipeline/out")));
    }

    #[test]
    fn explicit_override_beats_configured_results_dir() {
        let mut config = Config::default();
        config.analysis.results_dir = Some(PathBuf::from("/srv/pipeline/out"));

        let custom = PathBuf::from("/tmp/agroscan-test-results");
        let resolved = get_results_dir_with_override(&config, Some(custom.clone()));
        assert_eq!(resolved, Some(custom));
    }
}
