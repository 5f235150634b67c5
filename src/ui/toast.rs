// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a category-colored accent, an optional close
//! button and an optional countdown strip. Hovering a toast pauses its
//! countdown; a dismissing toast is drawn faded until it is removed.

use crate::config::Position;
use crate::notifications::{Entry, Manager, Notification, NotificationMessage as Message, State};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::strip;
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast.
    pub fn view<'a>(entry: &'a Entry, now: Instant) -> Element<'a, Message> {
        let notification = entry.notification();
        let id = entry.id();
        let dismissing = entry.state() == State::Dismissing;
        let accent = notification.category().color();

        let glyph = Text::new(notification.category().glyph())
            .size(typography::BODY_LG)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            });

        let (title, body) = text_lines(notification);
        let mut texts = Column::new().spacing(spacing::XXS);
        if let Some(title) = title {
            texts = texts.push(Text::new(title).size(typography::BODY_LG).style(
                |theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                },
            ));
        }
        if let Some(body) = body {
            texts = texts.push(Text::new(body).size(typography::CAPTION));
        }

        // Layout: [glyph] [title/body] [close]
        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(
                Container::new(texts)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        if entry.behavior().close_button {
            let close = button(Text::new("\u{2715}").size(typography::BODY))
                .on_press_maybe((!dismissing).then_some(Message::Dismiss(id)))
                .padding(spacing::XXS)
                .style(dismiss_button_style);
            content = content.push(close);
        }

        let mut card = Column::new().spacing(spacing::XS).push(content);
        if let Some(fraction) = entry.progress(now) {
            card = card.push(strip::strip(
                fraction,
                accent,
                sizing::PROGRESS_STRIP_HEIGHT,
            ));
        }

        let toast = Container::new(card)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent, dismissing));

        mouse_area(toast)
            .on_enter(Message::HoverEnter(id))
            .on_exit(Message::HoverExit(id))
            .into()
    }

    /// Renders every visible toast stacked at `position`.
    ///
    /// Returns an empty, zero-sized element while the overlay is torn down.
    pub fn view_overlay(manager: &Manager, position: Position, now: Instant) -> Element<'_, Message> {
        if !manager.has_overlay() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toasts: Vec<Element<'_, Message>> = manager
            .visible()
            .map(|entry| Self::view(entry, now))
            .collect();
        let (align_x, align_y) = alignment_for(position);

        Container::new(
            Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(align_x),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(align_x)
        .align_y(align_y)
        .padding(spacing::MD)
        .into()
    }
}

/// Title and body lines to draw; empty ones are skipped.
fn text_lines(notification: &Notification) -> (Option<&str>, Option<&str>) {
    (
        Some(notification.title()).filter(|title| !title.is_empty()),
        Some(notification.body()).filter(|body| !body.is_empty()),
    )
}

/// Maps a configured position to container alignment.
fn alignment_for(position: Position) -> (alignment::Horizontal, alignment::Vertical) {
    let horizontal = match position {
        Position::TopLeft | Position::BottomLeft => alignment::Horizontal::Left,
        Position::TopCenter | Position::BottomCenter => alignment::Horizontal::Center,
        Position::TopRight | Position::BottomRight => alignment::Horizontal::Right,
    };
    let vertical = if position.is_top() {
        alignment::Vertical::Top
    } else {
        alignment::Vertical::Bottom
    };
    (horizontal, vertical)
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, dismissing: bool) -> container::Style {
    let alpha = if dismissing {
        opacity::DISMISSING
    } else {
        opacity::OPAQUE
    };
    let bg_color = theme.extended_palette().background.base.color;
    let text_color = theme.palette().text;

    container::Style {
        background: Some(iced::Background::Color(Color { a: alpha, ..bg_color })),
        border: iced::Border {
            color: Color {
                a: alpha,
                ..accent_color
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: if dismissing { shadow::NONE } else { shadow::MD },
        text_color: Some(Color { a: alpha, ..text_color }),
        ..Default::default()
    }
}

/// Style function for the close button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_background = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    let (background, text_color, border) = match status {
        button::Status::Active => (None, base.text, iced::Border::default()),
        button::Status::Hovered => (
            hover_background(opacity::OVERLAY_SUBTLE),
            base.text,
            iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
        ),
        button::Status::Pressed => (
            hover_background(opacity::OVERLAY_MEDIUM),
            base.text,
            iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
        ),
        button::Status::Disabled => (
            None,
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            iced::Border::default(),
        ),
    };

    button::Style {
        background,
        text_color,
        border,
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::Category;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent, false);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn dismissing_toast_is_faded() {
        let theme = Theme::Light;
        let style = toast_container_style(&theme, palette::ERROR_500, true);

        assert!((style.border.color.a - opacity::DISMISSING).abs() < f32::EPSILON);
        assert_eq!(style.shadow, shadow::NONE);
    }

    #[test]
    fn empty_title_and_body_are_skipped() {
        let now = Instant::now();
        let body_only = Notification::new(Category::Info, "", "Saved for later", now);
        assert_eq!(text_lines(&body_only), (None, Some("Saved for later")));

        let title_only = Notification::new(Category::Success, "Added", "", now);
        assert_eq!(text_lines(&title_only), (Some("Added"), None));
    }

    #[test]
    fn positions_map_to_alignment() {
        assert_eq!(
            alignment_for(Position::TopRight),
            (alignment::Horizontal::Right, alignment::Vertical::Top)
        );
        assert_eq!(
            alignment_for(Position::BottomCenter),
            (alignment::Horizontal::Center, alignment::Vertical::Bottom)
        );
        assert_eq!(
            alignment_for(Position::BottomLeft),
            (alignment::Horizontal::Left, alignment::Vertical::Bottom)
        );
    }

    #[test]
    fn disabled_close_button_is_dimmed() {
        let theme = Theme::Dark;
        let active = dismiss_button_style(&theme, button::Status::Active);
        let disabled = dismiss_button_style(&theme, button::Status::Disabled);

        assert!(disabled.text_color.a < active.text_color.a);
    }
}
