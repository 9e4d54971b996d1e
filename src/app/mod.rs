// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between pages and the video
//! overlay.
//!
//! The `App` struct wires together the catalog, localization, the current
//! route and the overlay, and translates messages into state changes. The
//! overlay is the only component with side effects (media playback), and
//! every way of leaving a page dismisses it through its `close` path.

mod message;
pub mod paths;
mod route;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use route::Route;

use crate::catalog::Catalog;
use crate::config;
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::infrastructure;
use crate::ui::page_scroll::PageScroll;
use crate::ui::pages::{workout_day, workouts};
use crate::ui::theming::ThemeMode;
use crate::ui::transition::Transition;
use crate::ui::video_overlay;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    catalog: Catalog,
    route: Route,
    theme_mode: ThemeMode,
    overlay: video_overlay::State,
    transition: Transition,
    page_scroll: PageScroll,
    workouts: workouts::State,
    workout_day: workout_day::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("route", &self.route)
            .field("overlay_open", &self.overlay.is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 800;

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

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(app: App) -> iced::Result {
    use std::cell::RefCell;

    // Wrap the state in RefCell<Option<_>> to satisfy the Fn requirement
    // of iced 0.14 while only handing it out once.
    let boot_state = RefCell::new(Some(app));
    let boot = move || {
        let app = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        (app, Task::none())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration, locale and catalog, and picks the media backend.
    ///
    /// # Errors
    ///
    /// Returns an error if neither the requested nor the embedded catalog
    /// can be used.
    pub fn new(flags: Flags) -> Result<Self> {
        paths::init_cli_overrides(flags.config_dir.clone());

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        if let Some(key) = config_warning {
            tracing::warn!("{}", i18n.tr(&key));
        }

        let catalog = Catalog::load(flags.catalog.as_deref())?;
        let factory = infrastructure::media_factory(config.video.autoplay, config.video.start_muted);

        let route = flags
            .page
            .as_deref()
            .map(Route::from_path)
            .unwrap_or_default();

        tracing::info!(
            locale = %i18n.current_locale(),
            days = catalog.days().len(),
            %route,
            "starting"
        );

        Ok(Self {
            i18n,
            catalog,
            route,
            theme_mode: config.general.theme_mode,
            overlay: video_overlay::State::new(factory),
            transition: Transition::default(),
            page_scroll: PageScroll::default(),
            workouts: workouts::State::default(),
            workout_day: workout_day::State::default(),
        })
    }

    fn title(&self) -> String {
        let page = self.i18n.tr(self.route.label_key());
        self.i18n.tr_with_args("window-title", &[("page", page.as_str())])
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            catalog: &self.catalog,
            route: &mut self.route,
            overlay: &mut self.overlay,
            transition: &mut self.transition,
            page_scroll: &mut self.page_scroll,
            workouts: &mut self.workouts,
            workout_day: &mut self.workout_day,
        };
        update::update(&mut ctx, message, Instant::now())
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            catalog: &self.catalog,
            route: self.route,
            transition: &self.transition,
            page_scroll: &self.page_scroll,
            overlay: &self.overlay,
            workouts: &self.workouts,
            workout_day: &self.workout_day,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_overlay_subscription(&self.overlay),
            subscription::create_transition_subscription(self.transition.is_running()),
        ])
    }

    /// Current route.
    #[must_use]
    pub fn route(&self) -> Route {
        self.route
    }
}
