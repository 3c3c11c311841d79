// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::uploader;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Uploader(uploader::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional comma separated list of accepted extensions (e.g. `jpg,png`).
    pub formats: Option<String>,
    /// Optional error display duration in milliseconds.
    pub error_ms: Option<u64>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_DROPZONE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
