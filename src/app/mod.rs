// SPDX-License-Identifier: MPL-2.0
//! Demo host application embedding a single uploader.
//!
//! The `App` struct resolves the uploader settings from CLI flags and the
//! config file, forwards window file events to the uploader and consumes its
//! upload events.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, Config, HOST_ERROR_DISPLAY_MS};
use crate::i18n::fluent::I18n;
use crate::media::AcceptedFormats;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::uploader::{self, ErrorDisplayDuration, UploadedImage};
use iced::widget::{Column, Container, Text};
use iced::{alignment, window, Element, Length, Subscription, Task};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 420;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    uploader: uploader::State,
    last_upload: Option<UploadedImage>,
    /// i18n key of a warning raised while loading settings.
    startup_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("uploader", &self.uploader)
            .field("last_upload", &self.last_upload.as_ref().map(|u| u.file.name()))
            .finish()
    }
}

/// Accepted formats and error duration after applying CLI flags over the
/// config file. The host falls back to its own error duration when neither
/// sets one.
pub fn resolve_uploader_settings(
    flags: &Flags,
    config: &Config,
) -> (AcceptedFormats, ErrorDisplayDuration) {
    let formats = match (&flags.formats, &config.uploader.accepted_formats) {
        (Some(list), _) => AcceptedFormats::parse_list(list),
        (None, Some(list)) => AcceptedFormats::new(list.iter().cloned()),
        (None, None) => AcceptedFormats::default(),
    };
    let error_ms = flags
        .error_ms
        .or(config.uploader.error_display_ms)
        .unwrap_or(HOST_ERROR_DISPLAY_MS);

    (formats, ErrorDisplayDuration::new(error_ms))
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot function; the flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the application from flags and the config file.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, startup_warning) = config::load();
        (Self::with_config(flags, &config, startup_warning), Task::none())
    }

    /// Builds the application from an already loaded config.
    pub fn with_config(flags: Flags, config: &Config, startup_warning: Option<String>) -> Self {
        let (formats, error_display) = resolve_uploader_settings(&flags, config);
        tracing::info!(
            formats = %formats.accept_filter(),
            error_display_ms = error_display.millis(),
            "starting uploader"
        );

        Self {
            i18n: I18n::new(flags.lang, config),
            uploader: uploader::State::new(formats, error_display),
            last_upload: None,
            startup_warning,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    #[must_use]
    pub fn uploader(&self) -> &uploader::State {
        &self.uploader
    }

    #[must_use]
    pub fn last_upload(&self) -> Option<&UploadedImage> {
        self.last_upload.as_ref()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Uploader(msg) => {
                let (event, task) = self.uploader.update(msg);
                self.handle_uploader_event(event);
                task.map(Message::Uploader)
            }
        }
    }

    fn handle_uploader_event(&mut self, event: uploader::Event) {
        match event {
            uploader::Event::None => {}
            uploader::Event::ImageUploaded(image) => {
                tracing::info!(
                    file = %image.file.path().display(),
                    mime = ?image.file.mime_type(),
                    data_url_len = image.data_url.as_str().len(),
                    "received uploaded image"
                );
                self.startup_warning = None;
                self.last_upload = Some(image);
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let uploader_view = uploader::view(&self.uploader, &self.i18n).map(Message::Uploader);

        let status = match (&self.last_upload, &self.startup_warning) {
            (Some(image), _) => self
                .i18n
                .tr_with_args("host-last-upload", &[("name", image.file.name().as_str())]),
            (None, Some(key)) => self.i18n.tr(key),
            (None, None) => self.i18n.tr("host-no-upload"),
        };

        let content = Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(uploader_view)
            .push(
                Text::new(status)
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            );

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding(spacing::LG)
            .into()
    }
}
