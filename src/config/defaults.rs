// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Dismissal**: Auto-dismiss duration and its bounds
//! - **Timer**: Tick interval driving the dismissal timer
//! - **Logging**: Default log level of the demo binary

// ==========================================================================
// Dismissal Defaults
// ==========================================================================

/// Default time a toast stays visible (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 4000;

/// Minimum configurable default duration (in milliseconds).
pub const MIN_DURATION_MS: u64 = 500;

/// Maximum configurable default duration (in milliseconds).
pub const MAX_DURATION_MS: u64 = 60_000;

// ==========================================================================
// Timer Defaults
// ==========================================================================

/// Interval between dismissal timer ticks while a dismissal is pending.
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Log level used when none is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";
