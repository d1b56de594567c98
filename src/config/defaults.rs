// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

/// Decorative animations (pulse, staggered reveal) run unless disabled.
pub const DEFAULT_ANIMATIONS: bool = true;

/// Directory name appended to the platform data dir when no results
/// directory is configured.
pub const DEFAULT_RESULTS_DIR_NAME: &str = "results";

pub(crate) fn default_animations() -> Option<bool> {
    Some(DEFAULT_ANIMATIONS)
}
