// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the demo application.
//!
//! Each storefront action maps to a toast. The quick view additionally
//! drives the loading bar, the card overlay and its button's busy state. Handlers take the caller's `now` so they can be exercised
//! with synthetic time.

use super::{Message, Request};
use crate::i18n::fluent::I18n;
use crate::loading::{BusyButtons, ContentOverlay, LoadingBar};
use crate::notifications::{self, Category, Event, Options};
use iced::Task;
use std::time::{Duration, Instant};

/// Products cycled through by the "add to cart" button.
const DEMO_PRODUCTS: [&str; 4] = [
    "Trail Runner 2",
    "Merino Crew Socks",
    "Packable Rain Shell",
    "Insulated Bottle",
];

/// Largest compare list the storefront allows.
pub const COMPARE_MAX_PRODUCTS: usize = 4;

/// Simulated quick-view request latency.
const QUICK_VIEW_LATENCY: Duration = Duration::from_millis(1200);

/// Errors stay up a little longer than the default lifetime.
const ERROR_DURATION_MS: i64 = 6000;

/// Mutable state the handlers operate on.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub notifications: &'a mut notifications::Manager,
    pub loading: &'a mut LoadingBar,
    pub overlay: &'a mut ContentOverlay,
    pub busy: &'a mut BusyButtons<Request>,
    pub cart_items: &'a mut usize,
}

pub fn handle_add_to_cart(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let product = DEMO_PRODUCTS[*ctx.cart_items % DEMO_PRODUCTS.len()];
    *ctx.cart_items += 1;

    ctx.notifications.success(
        ctx.i18n.tr("toast-cart-added-title"),
        ctx.i18n
            .tr_with_args("toast-cart-added-body", &[("product", product)]),
        now,
    );
    Task::none()
}

pub fn handle_compare_full(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let max = COMPARE_MAX_PRODUCTS.to_string();
    ctx.notifications.warning(
        ctx.i18n.tr("toast-compare-full-title"),
        ctx.i18n
            .tr_with_args("toast-compare-full-body", &[("max", max.as_str())]),
        now,
    );
    Task::none()
}

pub fn handle_network_error(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.notify(
        Category::Error,
        ctx.i18n.tr("toast-network-error-title"),
        ctx.i18n.tr("toast-network-error-body"),
        Options::default().duration_ms(ERROR_DURATION_MS),
        now,
    );
    Task::none()
}

pub fn handle_persistent_notice(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.custom(
        "promo",
        ctx.i18n.tr("toast-persistent-title"),
        ctx.i18n.tr("toast-persistent-body"),
        Options::default().persistent(),
        now,
    );
    Task::none()
}

/// Starts a simulated request: its button goes busy, the card is covered
/// and the loading bar starts. Ignored while the same request is in flight.
pub fn handle_quick_view(ctx: &mut UpdateContext<'_>, request: Request) -> Task<Message> {
    let label = ctx.i18n.tr("loading-text");
    if !ctx.busy.start(request, Some(label.clone())) {
        tracing::debug!(?request, "request already in flight");
        return Task::none();
    }
    ctx.loading.start();
    ctx.overlay.show(label, false);

    Task::perform(
        async move {
            tokio::time::sleep(QUICK_VIEW_LATENCY).await;
            if request.fails() {
                Err("quick view endpoint unavailable".to_string())
            } else {
                Ok(())
            }
        },
        move |result| Message::QuickViewLoaded(request, result),
    )
}

pub fn handle_quick_view_loaded(
    ctx: &mut UpdateContext<'_>,
    request: Request,
    result: Result<(), String>,
    now: Instant,
) -> Task<Message> {
    ctx.busy.reset(request);
    if ctx.busy.is_empty() {
        ctx.overlay.hide(now);
    }

    match result {
        Ok(()) => {
            ctx.loading.complete(now);
            ctx.notifications.info(
                ctx.i18n.tr("toast-quick-view-loaded-title"),
                ctx.i18n.tr("toast-quick-view-loaded-body"),
                now,
            );
        }
        Err(reason) => {
            tracing::warn!(%reason, "quick view failed");
            ctx.loading.error(now);
            ctx.notifications.notify(
                Category::Error,
                ctx.i18n.tr("toast-quick-view-failed-title"),
                ctx.i18n.tr("toast-quick-view-failed-body"),
                Options::default().duration_ms(ERROR_DURATION_MS),
                now,
            );
        }
    }
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.tick(now);
    ctx.loading.tick(now);
    ctx.overlay.tick(now);
    Task::none()
}

/// Logs and discards the lifecycle events produced by the last update.
pub fn log_events(manager: &mut notifications::Manager) {
    for event in manager.take_events() {
        match event {
            Event::Evicted(id) => tracing::info!(%id, "toast evicted"),
            other => tracing::debug!(?other, "toast lifecycle"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::notifications::State;

    struct Fixture {
        i18n: I18n,
        notifications: notifications::Manager,
        loading: LoadingBar,
        overlay: ContentOverlay,
        busy: BusyButtons<Request>,
        cart_items: usize,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                i18n: I18n::new(Some("en-US".to_string()), &Config::default()),
                notifications: notifications::Manager::new(),
                loading: LoadingBar::default(),
                overlay: ContentOverlay::new(),
                busy: BusyButtons::new(),
                cart_items: 0,
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                i18n: &self.i18n,
                notifications: &mut self.notifications,
                loading: &mut self.loading,
                overlay: &mut self.overlay,
                busy: &mut self.busy,
                cart_items: &mut self.cart_items,
            }
        }
    }

    #[test]
    fn add_to_cart_shows_translated_toast() {
        let mut fixture = Fixture::new();
        let _ = handle_add_to_cart(&mut fixture.ctx(), Instant::now());

        let entry = fixture
            .notifications
            .visible()
            .next()
            .expect("toast should be visible");
        assert_eq!(entry.notification().title(), "Added to cart");
        assert_eq!(
            entry.notification().body(),
            "Trail Runner 2 is now in your cart."
        );
        assert_eq!(fixture.cart_items, 1);
    }

    #[test]
    fn persistent_notice_survives_ticks() {
        let t0 = Instant::now();
        let mut fixture = Fixture::new();
        let _ = handle_persistent_notice(&mut fixture.ctx(), t0);
        let _ = handle_tick(&mut fixture.ctx(), t0 + Duration::from_secs(60));

        let entry = fixture
            .notifications
            .visible()
            .next()
            .expect("toast should be visible");
        assert_eq!(entry.state(), State::Active);
        assert_eq!(entry.notification().category().as_str(), "promo");
    }

    #[test]
    fn failed_quick_view_tints_bar_and_shows_error() {
        let t0 = Instant::now();
        let mut fixture = Fixture::new();
        fixture.loading.start();

        let _ = handle_quick_view_loaded(
            &mut fixture.ctx(),
            Request::QuickViewFailing,
            Err("offline".to_string()),
            t0,
        );

        assert!(fixture.loading.is_error());
        assert_eq!(fixture.loading.progress(), 100.0);
        let entry = fixture
            .notifications
            .visible()
            .next()
            .expect("toast should be visible");
        assert_eq!(entry.notification().category(), &Category::Error);
        assert_eq!(
            entry.remaining(t0),
            Some(Duration::from_millis(ERROR_DURATION_MS as u64))
        );
    }

    #[test]
    fn quick_view_marks_button_busy_and_covers_card() {
        let mut fixture = Fixture::new();
        let _ = handle_quick_view(&mut fixture.ctx(), Request::QuickView);

        assert!(fixture.busy.is_busy(Request::QuickView));
        assert!(!fixture.busy.is_busy(Request::QuickViewFailing));
        assert_eq!(fixture.busy.label(Request::QuickView), Some("Loading..."));
        assert!(fixture.overlay.is_shown());
        assert_eq!(fixture.overlay.label(), "Loading...");
        assert!(fixture.loading.is_loading());
    }

    #[test]
    fn quick_view_in_flight_ignores_second_press() {
        let mut fixture = Fixture::new();
        let _ = handle_quick_view(&mut fixture.ctx(), Request::QuickView);
        fixture.loading.step();
        let progress = fixture.loading.progress();

        let _ = handle_quick_view(&mut fixture.ctx(), Request::QuickView);
        assert_eq!(fixture.loading.progress(), progress);
    }

    #[test]
    fn loaded_quick_view_resets_button_and_fades_overlay() {
        let t0 = Instant::now();
        let mut fixture = Fixture::new();
        let _ = handle_quick_view(&mut fixture.ctx(), Request::QuickView);

        let _ = handle_quick_view_loaded(&mut fixture.ctx(), Request::QuickView, Ok(()), t0);
        assert!(!fixture.busy.is_busy(Request::QuickView));
        assert!(fixture.overlay.is_visible());
        assert!(!fixture.overlay.is_shown());

        let _ = handle_tick(&mut fixture.ctx(), t0 + Duration::from_millis(300));
        assert!(!fixture.overlay.is_visible());
    }

    #[test]
    fn overlay_stays_while_another_request_runs() {
        let t0 = Instant::now();
        let mut fixture = Fixture::new();
        let _ = handle_quick_view(&mut fixture.ctx(), Request::QuickView);
        let _ = handle_quick_view(&mut fixture.ctx(), Request::QuickViewFailing);

        let _ = handle_quick_view_loaded(&mut fixture.ctx(), Request::QuickView, Ok(()), t0);
        assert!(fixture.overlay.is_shown());
        assert!(fixture.busy.is_busy(Request::QuickViewFailing));
    }

    #[test]
    fn log_events_drains_outbox() {
        let mut fixture = Fixture::new();
        let _ = handle_compare_full(&mut fixture.ctx(), Instant::now());

        log_events(&mut fixture.notifications);
        assert!(fixture.notifications.take_events().is_empty());
    }
}
