// SPDX-License-Identifier: MPL-2.0
//! Global loading bar pinned to the top edge of the window.

use crate::loading::LoadingBar;
use crate::ui::design_tokens::{palette, sizing};
use crate::ui::strip;
use iced::widget::{text, Container};
use iced::{Color, Element, Length};

/// Renders the bar. An idle bar still reserves its height so content below
/// does not jump when a request starts.
pub fn view<'a, Message: 'a>(bar: &LoadingBar) -> Element<'a, Message> {
    if !bar.is_visible() {
        return Container::new(text("").size(1))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::LOADING_BAR_HEIGHT))
            .into();
    }

    strip::strip(
        bar.progress() / 100.0,
        fill_color(bar),
        sizing::LOADING_BAR_HEIGHT,
    )
}

fn fill_color(bar: &LoadingBar) -> Color {
    if bar.is_error() {
        palette::ERROR_500
    } else {
        palette::PRIMARY_500
    }
}
