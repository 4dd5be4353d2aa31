// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a transient notification surface built with the Iced GUI framework.
//!
//! It shows a title and a message styled by severity, and hides itself after
//! a configurable timeout. Displaying again before the timeout restarts it.

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
