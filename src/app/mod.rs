// SPDX-License-Identifier: MPL-2.0
//! Demo application root state.
//!
//! The `App` struct wires the notification manager, the loading bar and
//! localization into an iced application that simulates storefront actions.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, Request};
pub use update::COMPARE_MAX_PRODUCTS;

use crate::config::{self, Position};
use crate::i18n::fluent::I18n;
use crate::loading::{BusyButtons, ContentOverlay, LoadingBar};
use crate::notifications::{self, Category, Options};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

/// Root iced application state.
pub struct App {
    pub i18n: I18n,
    notifications: notifications::Manager,
    loading: LoadingBar,
    /// Overlay over the quick-view card.
    overlay: ContentOverlay,
    busy: BusyButtons<Request>,
    position: Position,
    tick_interval: Duration,
    /// Items added through the demo, used to cycle product names.
    cart_items: usize,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("toasts", &self.notifications.count())
            .field("loading", &self.loading.is_loading())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 560;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 420;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and localization, and surfaces a config warning as a toast.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            notifications: notifications::Manager::with_defaults(
                config.notifications.to_defaults(),
            ),
            loading: LoadingBar::new(config.loading.to_timing()),
            overlay: ContentOverlay::new(),
            busy: BusyButtons::new(),
            position: config.notifications.position(),
            tick_interval: config.notifications.tick_interval(),
            cart_items: 0,
        };

        if let Some(key) = config_warning {
            let body = app.i18n.tr(&format!("{key}-body"));
            app.notifications.notify(
                Category::Warning,
                app.i18n.tr(&key),
                body,
                Options::default(),
                Instant::now(),
            );
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.tick_interval,
            self.notifications.has_notifications(),
            self.loading.is_animating() || self.overlay.is_animating(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            notifications: &mut self.notifications,
            loading: &mut self.loading,
            overlay: &mut self.overlay,
            busy: &mut self.busy,
            cart_items: &mut self.cart_items,
        };

        let task = match message {
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(notification_message, now);
                Task::none()
            }
            Message::Tick(instant) => update::handle_tick(&mut ctx, instant),
            Message::AddToCart => update::handle_add_to_cart(&mut ctx, now),
            Message::CompareFull => update::handle_compare_full(&mut ctx, now),
            Message::NetworkError => update::handle_network_error(&mut ctx, now),
            Message::PersistentNotice => update::handle_persistent_notice(&mut ctx, now),
            Message::QuickView(request) => update::handle_quick_view(&mut ctx, request),
            Message::QuickViewLoaded(request, result) => {
                update::handle_quick_view_loaded(&mut ctx, request, result, now)
            }
            Message::ClearAll => {
                ctx.notifications.dismiss_all();
                Task::none()
            }
        };

        update::log_events(&mut self.notifications);
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            notifications: &self.notifications,
            loading: &self.loading,
            overlay: &self.overlay,
            busy: &self.busy,
            position: self.position,
            now: Instant::now(),
        })
    }
}
