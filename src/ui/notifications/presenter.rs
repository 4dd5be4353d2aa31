// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Presenter` writes notifications onto the surface and owns the single
//! dismissal timer. Every display cancels the pending dismissal before arming
//! a new one, so at most one timer is ever live.

use super::notification::Notification;
use super::surface::ToastSurface;
use super::toast;
use crate::config::{Config, TICK_INTERVAL_MS};
use iced::{time, Element, Subscription};
use std::time::{Duration, Instant};

/// Messages for toast state changes.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Periodic tick for checking the dismissal deadline.
    Tick(Instant),
}

/// Identifies one armed dismissal timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DismissalTicket(u64);

/// The scheduled hide of the current toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDismissal {
    pub ticket: DismissalTicket,
    pub deadline: Instant,
}

/// Shows notifications on the toast surface and hides them when they expire.
#[derive(Debug)]
pub struct Presenter {
    /// `None` when no surface is mounted; displays are then ignored.
    surface: Option<ToastSurface>,
    pending: Option<PendingDismissal>,
    next_ticket: u64,
    default_duration: Duration,
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(ToastSurface::new(), &Config::default())
    }
}

impl Presenter {
    /// Creates a presenter driving the given surface.
    #[must_use]
    pub fn new(surface: ToastSurface, config: &Config) -> Self {
        Self {
            surface: Some(surface),
            ..Self::detached(config)
        }
    }

    /// Creates a presenter with no surface to draw on.
    #[must_use]
    pub fn detached(config: &Config) -> Self {
        Self {
            surface: None,
            pending: None,
            next_ticket: 0,
            default_duration: config.default_duration(),
        }
    }

    /// Attaches a surface, replacing (and returning) any previous one.
    ///
    /// A dismissal armed for the previous surface is dropped.
    pub fn mount(&mut self, surface: ToastSurface) -> Option<ToastSurface> {
        self.pending = None;
        self.surface.replace(surface)
    }

    /// Detaches the surface. Later displays become no-ops.
    pub fn unmount(&mut self) -> Option<ToastSurface> {
        self.pending = None;
        self.surface.take()
    }

    /// Shows a notification, using the current time as the start of its countdown.
    pub fn display(&mut self, notification: &Notification) {
        self.display_at(notification, Instant::now());
    }

    /// Shows a notification whose countdown starts at `now`.
    ///
    /// Without a mounted surface this does nothing at all, not even cancel
    /// the pending dismissal.
    pub fn display_at(&mut self, notification: &Notification, now: Instant) {
        let Some(surface) = self.surface.as_mut() else {
            log::debug!("No toast surface mounted, dropping \"{}\"", notification.title());
            return;
        };

        if let Some(previous) = self.pending.take() {
            log::debug!("Cancelled dismissal {:?}", previous.ticket);
        }

        surface.apply_style(&notification.severity().style());
        surface.set_text(notification.title(), notification.message());
        surface.show();

        let duration = notification.duration().unwrap_or(self.default_duration);
        let Some(deadline) = now.checked_add(duration) else {
            log::debug!("Duration {duration:?} is unbounded, toast stays visible");
            return;
        };

        let ticket = DismissalTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some(PendingDismissal { ticket, deadline });

        log::debug!(
            "Showing {:?} toast \"{}\" for {duration:?} ({ticket:?})",
            notification.severity(),
            notification.title()
        );
    }

    /// Fires the pending dismissal if its deadline has passed.
    ///
    /// Returns `true` if the surface was hidden by this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = matches!(self.pending, Some(pending) if now >= pending.deadline);
        if !due {
            return false;
        }

        if let Some(pending) = self.pending.take() {
            log::debug!("Dismissal {:?} fired", pending.ticket);
        }
        if let Some(surface) = self.surface.as_mut() {
            surface.hide();
        }
        true
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Tick(now) => {
                self.tick(*now);
            }
        }
    }

    /// Ticks every [`TICK_INTERVAL_MS`] while a dismissal is pending.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.has_pending_dismissal() {
            time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Renders the mounted surface.
    pub fn view(&self) -> Element<'_, Message> {
        toast::view(self.surface.as_ref())
    }

    #[must_use]
    pub fn surface(&self) -> Option<&ToastSurface> {
        self.surface.as_ref()
    }

    #[must_use]
    pub fn pending_dismissal(&self) -> Option<PendingDismissal> {
        self.pending
    }

    #[must_use]
    pub fn has_pending_dismissal(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }
}
