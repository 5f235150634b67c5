// SPDX-License-Identifier: MPL-2.0
//! Thin horizontal fill strip shared by toast countdowns and the loading bar.

use iced::widget::{text, Container, Row};
use iced::{Background, Color, Element, Length, Theme};

/// Resolution of the fill split; the filled part gets `fraction * SCALE` portions.
const SCALE: u16 = 1000;

/// Splits `SCALE` into (filled, empty) portions for a fraction in `0.0..=1.0`.
#[must_use]
pub fn portions(fraction: f32) -> (u16, u16) {
    let filled = (fraction.clamp(0.0, 1.0) * f32::from(SCALE)).round() as u16;
    (filled, SCALE - filled)
}

/// Renders a strip of `height` whose left `fraction` is painted with `color`.
/// The rest stays transparent.
pub fn strip<'a, Message: 'a>(fraction: f32, color: Color, height: f32) -> Element<'a, Message> {
    let (filled, empty) = portions(fraction);
    let mut row = Row::new().width(Length::Fill).height(Length::Fixed(height));

    if filled > 0 {
        row = row.push(segment(Length::FillPortion(filled), height, Some(color)));
    }
    if empty > 0 {
        row = row.push(segment(Length::FillPortion(empty), height, None));
    }
    row.into()
}

fn segment<'a, Message: 'a>(
    width: Length,
    height: f32,
    color: Option<Color>,
) -> Element<'a, Message> {
    Container::new(text("").size(1))
        .width(width)
        .height(Length::Fixed(height))
        .style(move |_theme: &Theme| iced::widget::container::Style {
            background: color.map(Background::Color),
            ..Default::default()
        })
        .into()
}
