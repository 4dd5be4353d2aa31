// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::config::Config;
use crate::ui::notifications::{Severity, ToastMessage};

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    TitleChanged(String),
    BodyChanged(String),
    /// Display the current title and body with the given severity.
    Show(Severity),
    Toast(ToastMessage),
}

/// Runtime flags passed from `main.rs` into the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub config: Config,
    /// Overrides the configured display duration for every toast.
    pub duration_ms: Option<u64>,
    /// Shows a toast of this severity right after startup.
    pub initial_severity: Option<Severity>,
}
