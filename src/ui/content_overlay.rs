// SPDX-License-Identifier: MPL-2.0
//! Loading overlay view: scrim, spinner and label over a content area.
//!
//! Push the result as the top layer of a `Stack` whose base is the content.

use crate::loading::ContentOverlay;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::spinner::Spinner;
use iced::widget::{container, Column, Container, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Renders the overlay, or `None` while it is hidden.
pub fn view<'a, Message: 'static>(
    overlay: &'a ContentOverlay,
    now: Instant,
) -> Option<Element<'a, Message>> {
    if !overlay.is_visible() {
        return None;
    }

    let fade = overlay.opacity(now);
    let dark = overlay.is_dark();
    let spinner = Spinner::new(
        Color {
            a: fade,
            ..palette::PRIMARY_500
        },
        overlay.spinner_rotation(),
        sizing::SPINNER_LG,
    )
    .into_element();

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(spinner)
        .push(Text::new(overlay.label()).size(typography::BODY));

    Some(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(move |theme: &Theme| overlay_style(theme, dark, fade))
            .into(),
    )
}

/// Scrim and text colors, scaled by the fade multiplier.
fn overlay_style(theme: &Theme, dark: bool, fade: f32) -> container::Style {
    let background = theme.extended_palette().background.base.color;
    let (scrim, text_color) = if dark {
        (palette::BLACK, background)
    } else {
        (background, theme.palette().text)
    };

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM * fade,
            ..scrim
        })),
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        text_color: Some(Color {
            a: fade,
            ..text_color
        }),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrim_alpha(style: &container::Style) -> f32 {
        match style.background {
            Some(iced::Background::Color(color)) => color.a,
            _ => panic!("overlay should have a solid scrim"),
        }
    }

    #[test]
    fn hidden_overlay_renders_nothing() {
        let overlay = ContentOverlay::new();
        assert!(view::<()>(&overlay, Instant::now()).is_none());
    }

    #[test]
    fn shown_overlay_renders() {
        let mut overlay = ContentOverlay::new();
        overlay.show("Loading...", false);
        assert!(view::<()>(&overlay, Instant::now()).is_some());
    }

    #[test]
    fn dark_overlay_uses_black_scrim() {
        let style = overlay_style(&Theme::Light, true, 1.0);
        match style.background {
            Some(iced::Background::Color(color)) => {
                assert_eq!(Color { a: 1.0, ..color }, palette::BLACK);
            }
            _ => panic!("overlay should have a solid scrim"),
        }
    }

    #[test]
    fn fade_scales_scrim_and_text() {
        let full = overlay_style(&Theme::Light, false, 1.0);
        let half = overlay_style(&Theme::Light, false, 0.5);

        assert!((scrim_alpha(&full) - opacity::OVERLAY_MEDIUM).abs() < f32::EPSILON);
        assert!((scrim_alpha(&half) - opacity::OVERLAY_MEDIUM * 0.5).abs() < f32::EPSILON);
        assert!(half.text_color.map_or(0.0, |color| color.a) < 1.0);
    }
}
