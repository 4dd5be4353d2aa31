// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the notification surface.
//!
//! The toast appears as a card at the top center of the window, colored by
//! the severity last applied to the surface.

use super::style::Appearance;
use super::surface::ToastSurface;
use crate::ui::design_tokens::{radius, shadow, sizing, spacing, typography};
use iced::widget::{text, Column, Container, Row, Svg};
use iced::{alignment, Border, Element, Length, Padding, Theme};

/// Renders the surface, or nothing when it is absent or hidden.
pub fn view<'a, M: 'a>(surface: Option<&'a ToastSurface>) -> Element<'a, M> {
    match surface {
        Some(surface) if surface.is_visible() => card(surface),
        _ => empty(),
    }
}

fn card<'a, M: 'a>(surface: &'a ToastSurface) -> Element<'a, M> {
    let appearance = surface.appearance();

    let copy = Column::new()
        .spacing(spacing::XXS)
        .push(
            text(surface.title())
                .size(typography::TITLE_SM)
                .color(appearance.text),
        )
        .push(
            text(surface.message())
                .size(typography::BODY)
                .color(appearance.text),
        );

    // Layout: [icon] [title / message]
    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);
    if let Some(glyph) = surface.icon() {
        content = content.push(
            Svg::new(glyph.handle())
                .width(Length::Fixed(sizing::ICON_TOAST))
                .height(Length::Fixed(sizing::ICON_TOAST)),
        );
    }
    content = content.push(Container::new(copy).width(Length::Fill));

    let toast = Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::MD)
        .style(move |theme: &Theme| toast_container_style(theme, appearance));

    Container::new(toast)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Top)
        .padding(Padding {
            top: spacing::LG,
            right: spacing::MD,
            bottom: spacing::MD,
            left: spacing::MD,
        })
        .into()
}

/// An empty container that takes no space.
fn empty<'a, M: 'a>() -> Element<'a, M> {
    Container::new(text(""))
        .width(Length::Shrink)
        .height(Length::Shrink)
        .into()
}

/// Style function for the toast container.
fn toast_container_style(
    _theme: &Theme,
    appearance: Appearance,
) -> iced::widget::container::Style {
    iced::widget::container::Style {
        background: Some(iced::Background::Color(appearance.background)),
        border: Border {
            color: appearance.border,
            width: appearance.border_width,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        text_color: Some(appearance.text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;
    use crate::ui::notifications::Severity;

    #[test]
    fn toast_container_style_uses_appearance_colors() {
        let appearance = Severity::Error.style().appearance;
        let style = toast_container_style(&Theme::Light, appearance);

        assert_eq!(style.border.color, palette::RED_BORDER);
        assert_eq!(
            style.background,
            Some(iced::Background::Color(palette::RED_500))
        );
    }

    #[test]
    fn card_style_is_fully_opaque() {
        for severity in [Severity::Normal, Severity::Success, Severity::Error] {
            let style = toast_container_style(&Theme::Dark, severity.style().appearance);

            assert_eq!(style.border.color.a, 1.0);
            assert_eq!(style.text_color.map(|color| color.a), Some(1.0));
        }
    }

    #[test]
    fn view_handles_every_surface_state() {
        let mut surface = ToastSurface::new();
        let _: Element<'_, ()> = view(None);
        let _: Element<'_, ()> = view(Some(&surface));

        surface.apply_style(&Severity::Success.style());
        surface.show();
        let _: Element<'_, ()> = view(Some(&surface));
    }
}
