// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.
//!
//! The storefront panel sits under the loading bar; toasts are stacked on
//! top of everything. The quick-view card carries its own loading overlay.

use super::{Message, Request};
use crate::config::Position;
use crate::i18n::fluent::I18n;
use crate::loading::{BusyButtons, ContentOverlay, LoadingBar};
use crate::notifications::Manager;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::spinner::Spinner;
use crate::ui::{content_overlay, loading_bar, Toast};
use iced::widget::{button, container, Button, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub notifications: &'a Manager,
    pub loading: &'a LoadingBar,
    pub overlay: &'a ContentOverlay,
    pub busy: &'a BusyButtons<Request>,
    pub position: Position,
    pub now: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let action = |key: &str, message: Message| {
        button(Text::new(i18n.tr(key)).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .on_press(message)
    };

    let loading_caption = if ctx.loading.is_loading() {
        i18n.tr("loading-text")
    } else {
        String::new()
    };
    let live_count = ctx.notifications.live_count().to_string();

    let panel = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(i18n.tr("demo-heading")).size(typography::TITLE_MD))
        .push(Text::new(i18n.tr("demo-subtitle")).size(typography::BODY))
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(action("demo-add-to-cart", Message::AddToCart))
                .push(action("demo-compare-full", Message::CompareFull))
                .push(action("demo-network-error", Message::NetworkError)),
        )
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(action("demo-persistent", Message::PersistentNotice))
                .push(request_button(
                    i18n.tr("demo-quick-view"),
                    Request::QuickView,
                    ctx.busy,
                    ctx.overlay,
                ))
                .push(request_button(
                    i18n.tr("demo-quick-view-fail"),
                    Request::QuickViewFailing,
                    ctx.busy,
                    ctx.overlay,
                )),
        )
        .push(quick_view_card(i18n, ctx.overlay, ctx.now))
        .push(
            Row::new()
                .spacing(spacing::MD)
                .align_y(alignment::Vertical::Center)
                .push(action("demo-clear-all", Message::ClearAll))
                .push(
                    Text::new(i18n.tr_with_args(
                        "demo-live-count",
                        &[("count", live_count.as_str())],
                    ))
                    .size(typography::CAPTION),
                )
                .push(Text::new(loading_caption).size(typography::CAPTION)),
        );

    let base = Column::new()
        .push(loading_bar::view(ctx.loading))
        .push(
            Container::new(panel)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::LG),
        );

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(Toast::view_overlay(ctx.notifications, ctx.position, ctx.now).map(Message::Notification))
        .into()
}

/// Button for a request: disabled with a spinner and its busy label while
/// the request runs.
fn request_button<'a>(
    label: String,
    request: Request,
    busy: &'a BusyButtons<Request>,
    overlay: &ContentOverlay,
) -> Button<'a, Message> {
    let content: Element<'a, Message> = if busy.is_busy(request) {
        let spinner = Spinner::new(
            palette::PRIMARY_500,
            overlay.spinner_rotation(),
            sizing::SPINNER_SM,
        )
        .into_element();
        let mut row = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(spinner);
        if let Some(busy_label) = busy.label(request) {
            row = row.push(Text::new(busy_label).size(typography::BODY));
        }
        row.into()
    } else {
        Text::new(label).size(typography::BODY).into()
    };

    button(content)
        .padding([spacing::XS, spacing::MD])
        .on_press_maybe((!busy.is_busy(request)).then_some(Message::QuickView(request)))
}

/// Product card the quick view loads into, covered while it loads.
fn quick_view_card<'a>(
    i18n: &I18n,
    overlay: &'a ContentOverlay,
    now: Instant,
) -> Element<'a, Message> {
    let card = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(i18n.tr("demo-quick-view-card-title")).size(typography::BODY_LG))
            .push(Text::new(i18n.tr("demo-quick-view-card-body")).size(typography::CAPTION)),
    )
    .width(Length::Fixed(sizing::TOAST_WIDTH))
    .padding(spacing::MD)
    .style(container::bordered_box);

    let mut layers = Stack::new().push(card);
    if let Some(layer) = content_overlay::view(overlay, now) {
        layers = layers.push(layer);
    }
    layers.into()
}
