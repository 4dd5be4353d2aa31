// SPDX-License-Identifier: MPL-2.0
//! The notification surface: one container with title, message and icon slots.
//!
//! The surface only stores what is shown. Timing lives in the presenter.

use super::style::{Appearance, Glyph, StyleDescriptor};
use crate::ui::design_tokens::{motion, opacity};

/// Whether the toast is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Presentation flags derived from [`Visibility`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    pub opacity: f32,
    /// Vertical translation in logical pixels.
    pub offset_y: f32,
}

impl Visibility {
    #[must_use]
    pub fn presentation(self) -> Presentation {
        match self {
            Visibility::Visible => Presentation {
                opacity: opacity::OPAQUE,
                offset_y: motion::VISIBLE_OFFSET_Y,
            },
            Visibility::Hidden => Presentation {
                opacity: opacity::TRANSPARENT,
                offset_y: motion::HIDDEN_OFFSET_Y,
            },
        }
    }
}

/// The single reusable toast element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastSurface {
    visibility: Visibility,
    appearance: Appearance,
    title: String,
    message: String,
    icon: Option<Glyph>,
}

impl ToastSurface {
    /// Creates a hidden, empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the glyph the icon slot starts out with.
    #[must_use]
    pub fn with_icon(mut self, glyph: Glyph) -> Self {
        self.icon = Some(glyph);
        self
    }

    /// Replaces the appearance and, if the descriptor carries one, the icon.
    pub fn apply_style(&mut self, style: &StyleDescriptor) {
        self.appearance = style.appearance;
        if let Some(glyph) = style.icon {
            self.icon = Some(glyph);
        }
    }

    /// Replaces both text slots verbatim.
    pub fn set_text(&mut self, title: &str, message: &str) {
        title.clone_into(&mut self.title);
        message.clone_into(&mut self.message);
    }

    pub fn show(&mut self) {
        self.visibility = Visibility::Visible;
    }

    pub fn hide(&mut self) {
        self.visibility = Visibility::Hidden;
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    #[must_use]
    pub fn presentation(&self) -> Presentation {
        self.visibility.presentation()
    }

    #[must_use]
    pub fn appearance(&self) -> Appearance {
        self.appearance
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
    pub fn icon(&self) -> Option<Glyph> {
        self.icon
    }
}
