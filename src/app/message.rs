// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ResultSet;
use crate::ui::gallery;
use crate::ui::intake;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Intake(intake::Message),
    Gallery(gallery::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for banner expiry and gallery animation timing.
    Tick(Instant),
    /// The window was resized; the gallery viewport math tracks it.
    WindowResized(iced::Size),
    /// Result of the submission handover task.
    SubmissionFinished(Result<ResultSet, Error>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `es`, `en-US`).
    pub lang: Option<String>,
    /// Optional image path to preload into the intake on startup.
    pub file_path: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `AGROSCAN_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional results directory override.
    /// Takes precedence over the `AGROSCAN_RESULTS_DIR` environment variable.
    pub results_dir: Option<String>,
}
