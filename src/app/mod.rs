// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the zoom widget.
//!
//! The `App` struct wires together localization, configuration, and
//! the widget, and translates top-level messages into side effects
//! like asynchronous image loading.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::zoomer::{self, ZoomOptions};
use iced::{window, Element, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 420;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    zoomer: zoomer::State,
    /// Whether an image is currently decoding.
    loading: bool,
    /// i18n key of the last failure, surfaced as a caption.
    notice_key: Option<&'static str>,
}

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
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

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

impl App {
    /// Initializes application state and optionally kicks off
    /// asynchronous image loading based on `Flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_notice) = match config::load() {
            Ok(config) => (config, None),
            Err(err) => (config::Config::default(), Some(err.i18n_key())),
        };
        let i18n = I18n::new(flags.lang.clone(), &config);
        let zoomer = zoomer::State::new(ZoomOptions::from_config(&config));

        let mut app = App {
            i18n,
            zoomer,
            loading: false,
            notice_key: config_notice,
        };

        let task = match flags.file_path {
            Some(path) => {
                app.loading = true;
                Task::perform(media::load_image_async(path.into()), Message::ImageLoaded)
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
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
}
