// SPDX-License-Identifier: MPL-2.0
//! Severity-to-style mapping.
//!
//! Each [`Severity`] maps to one [`StyleDescriptor`] which the surface applies
//! in a single step. A descriptor without an icon leaves the icon slot as is.

use super::notification::Severity;
use crate::ui::design_tokens::{border, palette};
use iced::widget::svg::Handle;
use iced::Color;
use std::sync::OnceLock;

/// Icons shown in the toast's icon slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Checkmark,
    Cross,
}

impl Glyph {
    /// Returns the cached SVG handle for this glyph.
    pub fn handle(self) -> Handle {
        static CHECKMARK: OnceLock<Handle> = OnceLock::new();
        static CROSS: OnceLock<Handle> = OnceLock::new();

        match self {
            Glyph::Checkmark => CHECKMARK
                .get_or_init(|| Handle::from_memory(self.svg_bytes()))
                .clone(),
            Glyph::Cross => CROSS
                .get_or_init(|| Handle::from_memory(self.svg_bytes()))
                .clone(),
        }
    }

    /// Raw SVG source of the glyph.
    #[must_use]
    pub fn svg_bytes(self) -> &'static [u8] {
        match self {
            Glyph::Checkmark => include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/checkmark.svg"
            )),
            Glyph::Cross => include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/cross.svg"
            )),
        }
    }
}

/// Colors of the toast container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub background: Color,
    pub border: Color,
    pub border_width: f32,
    pub text: Color,
}

impl Default for Appearance {
    fn default() -> Self {
        Severity::Normal.style().appearance
    }
}

/// Everything a severity changes on the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleDescriptor {
    pub appearance: Appearance,
    /// `None` keeps whatever glyph the icon slot already shows.
    pub icon: Option<Glyph>,
}

impl Severity {
    /// Returns the style descriptor for this severity level.
    #[must_use]
    pub fn style(self) -> StyleDescriptor {
        match self {
            Severity::Success => StyleDescriptor {
                appearance: Appearance {
                    background: palette::GREEN_500,
                    border: palette::GREEN_BORDER,
                    border_width: border::WIDTH_SM,
                    text: palette::WHITE,
                },
                icon: Some(Glyph::Checkmark),
            },
            Severity::Error => StyleDescriptor {
                appearance: Appearance {
                    background: palette::RED_500,
                    border: palette::RED_BORDER,
                    border_width: border::WIDTH_SM,
                    text: palette::WHITE,
                },
                icon: Some(Glyph::Cross),
            },
            Severity::Normal => StyleDescriptor {
                appearance: Appearance {
                    background: palette::WHITE,
                    border: palette::GRAY_300,
                    border_width: border::WIDTH_SM,
                    text: palette::GRAY_900,
                },
                icon: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_backgrounds_are_distinct() {
        let normal = Severity::Normal.style().appearance.background;
        let success = Severity::Success.style().appearance.background;
        let error = Severity::Error.style().appearance.background;

        assert_ne!(normal, success);
        assert_ne!(normal, error);
        assert_ne!(success, error);
    }

    #[test]
    fn only_success_and_error_carry_a_glyph() {
        assert_eq!(Severity::Success.style().icon, Some(Glyph::Checkmark));
        assert_eq!(Severity::Error.style().icon, Some(Glyph::Cross));
        assert_eq!(Severity::Normal.style().icon, None);
    }

    #[test]
    fn all_severities_use_a_thin_border() {
        for severity in [Severity::Normal, Severity::Success, Severity::Error] {
            assert_eq!(severity.style().appearance.border_width, border::WIDTH_SM);
        }
    }

    #[test]
    fn glyph_sources_are_svg() {
        for glyph in [Glyph::Checkmark, Glyph::Cross] {
            let source = std::str::from_utf8(glyph.svg_bytes()).expect("svg is utf-8");
            assert!(source.trim_start().starts_with("<svg"));
            assert!(source.contains("viewBox=\"0 0 34 34\""));
        }
    }
}
