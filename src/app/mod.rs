// SPDX-License-Identifier: MPL-2.0
//! Host application that mounts the lightbox.
//!
//! `App` owns the image list and the overlay style resolved at startup. The
//! lightbox is shown immediately; when it reports [`lightbox::Effect::Close`]
//! the host tears it down, drops it and renders a small screen from which it
//! can be reopened at the last viewed index.

mod message;
pub mod paths;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::directory_scanner;
use crate::i18n::fluent::I18n;
use crate::image_source::ImageSource;
use crate::ui::lightbox::{self, OverlayStyle};
use crate::ui::styles;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root iced application state.
pub struct App {
    pub i18n: I18n,
    images: Vec<ImageSource>,
    style: OverlayStyle,
    lightbox: Option<lightbox::State>,
    last_index: usize,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("images", &self.images.len())
            .field("lightbox_open", &self.lightbox.is_some())
            .field("last_index", &self.last_index)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 480;

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
    use std::cell::RefCell;

    // iced 0.14 wants a `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
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
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        if let Some(key) = config_warning {
            tracing::warn!("{}", i18n.tr(&key));
        }

        let mut style = OverlayStyle::from_config(&config);
        if let Some(hex) = flags.background.as_deref() {
            match styles::overlay::parse_color(hex) {
                Some(color) => style.background = color,
                None => tracing::warn!(value = hex, "ignoring invalid --background colour"),
            }
        }

        let images = directory_scanner::expand_arguments(&flags.images);
        tracing::info!(count = images.len(), "starting lightbox");

        (Self::with_images(i18n, images, flags.start, style), Task::none())
    }

    /// Builds the app with the lightbox already open.
    pub fn with_images(
        i18n: I18n,
        images: Vec<ImageSource>,
        start_index: Option<usize>,
        style: OverlayStyle,
    ) -> Self {
        let mut app = Self {
            i18n,
            images,
            style,
            lightbox: None,
            last_index: start_index.unwrap_or(0),
        };
        app.open_lightbox();
        app
    }

    fn open_lightbox(&mut self) {
        let state = lightbox::State::new(self.images.clone(), Some(self.last_index), self.style);
        self.last_index = state.current_index();
        self.lightbox = Some(state);
    }

    fn close_lightbox(&mut self) {
        if let Some(mut state) = self.lightbox.take() {
            state.teardown();
            self.last_index = state.current_index();
            tracing::info!(index = self.last_index, "lightbox closed");
        }
    }

    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox.is_some()
    }

    pub fn lightbox(&self) -> Option<&lightbox::State> {
        self.lightbox.as_ref()
    }

    pub fn last_index(&self) -> usize {
        self.last_index
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.lightbox.as_ref().and_then(|state| state.current_image()) {
            Some(image) => format!("{image} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        match &self.lightbox {
            Some(state) => state.subscription().map(Message::Lightbox),
            None => Subscription::none(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Lightbox(message) => {
                let Some(state) = self.lightbox.as_mut() else {
                    return Task::none();
                };
                let effect = state.update(message);
                let index = state.current_index();
                match effect {
                    lightbox::Effect::Close => self.close_lightbox(),
                    lightbox::Effect::None => self.last_index = index,
                }
            }
            Message::Reopen => {
                if self.lightbox.is_none() {
                    self.open_lightbox();
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            lightbox: self.lightbox.as_ref(),
            image_count: self.images.len(),
        })
    }
}
