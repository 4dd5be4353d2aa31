// SPDX-License-Identifier: MPL-2.0
//! Toast notification for user feedback.
//!
//! This module provides a single, reusable toast: a card with a title,
//! a message and a severity icon that slides in on display and hides itself
//! once its duration has elapsed.
//!
//! # Components
//!
//! - [`notification`] - `Notification` display request and `Severity`
//! - [`style`] - Severity-to-style mapping and glyphs
//! - [`surface`] - `ToastSurface`, the element the toast is drawn from
//! - [`presenter`] - `Presenter`, owning the surface and its dismissal timer
//! - [`toast`] - Rendering of the surface
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Notification, Presenter};
//!
//! let mut presenter = Presenter::default();
//! presenter.display(&Notification::success("Saved", "Your booking is confirmed"));
//!
//! // In your view function, render the toast
//! let toast_overlay = presenter.view().map(Message::Toast);
//! ```
//!
//! Displaying again while a toast is up replaces its content and restarts
//! the countdown; the earlier countdown never hides the new content.

mod notification;
mod presenter;
mod style;
mod surface;
mod toast;

pub use notification::{Notification, Severity};
pub use presenter::{DismissalTicket, Message as ToastMessage, PendingDismissal, Presenter};
pub use style::{Appearance, Glyph, StyleDescriptor};
pub use surface::{Presentation, ToastSurface, Visibility};
pub use toast::view;
