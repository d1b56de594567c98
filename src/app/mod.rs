// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the intake and gallery
//! views.
//!
//! The `App` struct wires together the components (intake, gallery,
//! notifications, localization) and translates component effects into side
//! effects like async preview reads, the native file picker, and the
//! submission handover. Policy decisions (window sizing, screen switching,
//! tick gating) stay close to the main update loop so user-facing behavior
//! is easy to audit.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::i18n::I18n;
use crate::ui::gallery;
use crate::ui::intake;
use crate::ui::notifications;
use iced::{Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Root Iced application state bridging UI components, localization, and
/// preferences.
pub struct App {
    pub i18n: I18n,
    pub(crate) screen: Screen,
    pub(crate) intake: intake::State,
    pub(crate) gallery: gallery::State,
    /// Banner manager for user feedback.
    pub(crate) notifications: notifications::Manager,
    /// Where the analysis pipeline renders its results.
    pub(crate) results_dir: Option<PathBuf>,
    /// Tracked window height, feeding the gallery's viewport math.
    pub(crate) window_height: f32,
    pub(crate) config: Config,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("submit_enabled", &self.intake.submit_enabled())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone(), flags.results_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Intake,
            intake: intake::State::new(),
            gallery: gallery::State::default(),
            notifications: notifications::Manager::new(),
            results_dir: None,
            window_height: WINDOW_DEFAULT_HEIGHT as f32,
            config: Config::default(),
        }
    }
}

impl App {
    /// Initializes application state and optionally preloads an image from
    /// the `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let mut app = App {
            i18n,
            gallery: gallery::State::new(config.animations_enabled()),
            results_dir: paths::get_results_dir(&config),
            config,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::error(key));
        }

        let task = match flags.file_path {
            Some(path) => {
                let effect = app
                    .intake
                    .handle(intake::Message::FilesDropped(vec![PathBuf::from(path)]));
                update::perform_intake_effect(&mut app, effect)
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.config.general.theme_mode.iced_theme()
    }
}
