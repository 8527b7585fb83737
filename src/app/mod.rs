// SPDX-License-Identifier: MPL-2.0
//! Application root state for the tilt card showcase window.
//!
//! The `App` struct owns one [`TiltCard`] and the canvas cache that renders
//! it. Pointer messages from the canvas drive the card's gesture hooks; a
//! frame tick subscription runs only while the card springs back to rest.
//! The cache is cleared after an update only when the tilt actually changed.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::card::TiltCard;
use crate::domain::card::{CardConfig, CardPreset};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::widgets::tilt_card::canvas_size;
use crate::ui::widgets::CardContent;
use iced::widget::canvas;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    card: TiltCard,
    content: CardContent,
    cache: canvas::Cache,
    /// Instant of the previous frame tick while settling.
    last_tick: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("tilt", &self.card.tilt())
            .field("phase", &self.card.phase())
            .finish()
    }
}

pub const MIN_WINDOW_WIDTH: u32 = 320;
pub const MIN_WINDOW_HEIGHT: u32 = 320;

/// Builds the window settings: the card canvas plus a margin and the readout line.
pub fn window_settings(config: &CardConfig) -> window::Settings {
    let canvas = canvas_size(config);
    let width = canvas.width + spacing::XL * 2.0;
    let height = canvas.height + spacing::SM + typography::CAPTION * 2.0 + spacing::XL * 2.0;

    window::Settings {
        size: iced::Size::new(width, height),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Resolves the card configuration from `settings.toml` and the CLI flags.
///
/// A broken settings file or invalid values fall back to the chosen preset;
/// the problem is logged and never aborts startup.
pub fn resolve_card_config(flags: &Flags) -> CardConfig {
    let (settings, warning) = config::load();
    if let Some(warning) = warning {
        log::warn!("{warning}");
    }

    let mut card = settings.card_config(flags.preset).unwrap_or_else(|err| {
        let preset = flags.preset.unwrap_or(config::DEFAULT_PRESET);
        log::warn!("using {preset} preset: {err}");
        preset.config()
    });

    if let Some(max_angle) = flags.max_angle {
        card = card.with_max_angle(max_angle);
    }
    card
}

/// Writes the CLI's `preset` and `max_angle` over the loaded settings.
fn settings_with_flags(mut settings: config::Config, flags: &Flags) -> config::Config {
    if let Some(preset) = flags.preset {
        settings.preset = Some(preset.name().to_string());
    }
    if let Some(max_angle) = flags.max_angle {
        settings.card.max_angle = Some(max_angle);
    }
    settings
}

/// Persists the CLI choices to `settings.toml`, keeping every other key.
fn save_flags(flags: &Flags) {
    let (settings, warning) = config::load();
    if let Some(warning) = warning {
        log::warn!("{warning}; not overwriting settings");
        return;
    }
    match config::save(&settings_with_flags(settings, flags)) {
        Ok(()) => log::info!("saved startup flags to settings"),
        Err(err) => log::warn!("could not save settings: {err}"),
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    paths::init_cli_override(flags.config_dir.clone());
    if flags.save_config {
        save_flags(&flags);
    }

    let card_config = resolve_card_config(&flags);
    log::info!(
        "starting with max angle {}°, parallax {} px {:?}",
        card_config.max_angle,
        card_config.parallax_offset,
        card_config.parallax
    );

    let boot = move || App::new(card_config);

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings(&card_config))
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(CardPreset::default().config())
    }
}

impl App {
    fn with_config(config: CardConfig) -> Self {
        Self {
            card: TiltCard::new(config),
            content: CardContent::default(),
            cache: canvas::Cache::new(),
            last_tick: None,
        }
    }

    fn new(config: CardConfig) -> (Self, Task<Message>) {
        (Self::with_config(config), Task::none())
    }

    fn title(&self) -> String {
        String::from("Iced Tilt")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.card.is_animating())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            card: &mut self.card,
            last_tick: &mut self.last_tick,
        };

        match message {
            Message::Card(event) => update::handle_card_event(&mut ctx, event),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }

        if self.card.take_dirty() {
            self.cache.clear();
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            card: &self.card,
            content: &self.content,
            cache: &self.cache,
        })
    }
}
