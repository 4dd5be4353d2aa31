// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` display request and the
//! `Severity` enum that selects its styling.

use std::time::Duration;

/// Severity level determines the visual styling of the toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Neutral message (white background, icon left as is).
    #[default]
    Normal,
    /// Operation completed successfully (green, checkmark).
    Success,
    /// Operation failed (red, cross).
    Error,
}

impl From<&str> for Severity {
    /// Parses a severity name. Only the exact names `success` and `error`
    /// are recognized; anything else falls back to `Normal`.
    fn from(value: &str) -> Self {
        match value {
            "success" => Severity::Success,
            "error" => Severity::Error,
            _ => Severity::Normal,
        }
    }
}

/// A request to show the toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    title: String,
    message: String,
    severity: Severity,
    /// Overrides the presenter's default duration when set.
    duration: Option<Duration>,
}

impl Notification {
    /// Creates a notification with the given title, message and severity.
    pub fn new(severity: Severity, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
            duration: None,
        }
    }

    /// Creates a neutral notification.
    pub fn normal(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Normal, title, message)
    }

    /// Creates a success notification.
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Success, title, message)
    }

    /// Creates an error notification.
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, title, message)
    }

    /// Sets how long the toast stays visible, overriding the default.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_severity_is_normal() {
        assert_eq!(Severity::default(), Severity::Normal);
    }

    #[test]
    fn severity_parses_known_names() {
        assert_eq!(Severity::from("success"), Severity::Success);
        assert_eq!(Severity::from("error"), Severity::Error);
        assert_eq!(Severity::from("normal"), Severity::Normal);
    }

    #[test]
    fn unknown_severity_falls_back_to_normal() {
        assert_eq!(Severity::from("warning"), Severity::Normal);
        assert_eq!(Severity::from(""), Severity::Normal);
    }

    #[test]
    fn severity_names_are_case_and_whitespace_sensitive() {
        assert_eq!(Severity::from("Success"), Severity::Normal);
        assert_eq!(Severity::from("ERROR"), Severity::Normal);
        assert_eq!(Severity::from(" error"), Severity::Normal);
        assert_eq!(Severity::from("success "), Severity::Normal);
    }

    #[test]
    fn notification_constructors_set_correct_severity() {
        assert_eq!(Notification::normal("", "").severity(), Severity::Normal);
        assert_eq!(Notification::success("", "").severity(), Severity::Success);
        assert_eq!(Notification::error("", "").severity(), Severity::Error);
    }

    #[test]
    fn notification_builder_pattern_works() {
        let notification = Notification::error("Upload failed", "<b>quota</b> exceeded")
            .with_duration(Duration::from_millis(1500));

        assert_eq!(notification.title(), "Upload failed");
        assert_eq!(notification.message(), "<b>quota</b> exceeded");
        assert_eq!(notification.duration(), Some(Duration::from_millis(1500)));
    }
}
