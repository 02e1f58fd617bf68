//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::Settings;
pub use message::Message;
pub use state::{App, INITIAL_WINDOW_SIZE};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings; profile content and asset paths come from here
        let settings = Settings::load();
        let app = Self::with_settings(settings);

        // 2. Open main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: INITIAL_WINDOW_SIZE,
            min_size: Some(iced::Size::new(360.0, 480.0)),
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "homepage".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        // 3. Start loading fonts, banner and avatar
        let init_task = Task::batch([open_window.map(Message::WindowOpened), app.start_preload()]);

        (app, init_task)
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn title(&self, _window_id: iced::window::Id) -> String {
        format!("{} - Homepage", self.core.settings.profile.name)
    }

    /// Subscriptions for window geometry, closing and hover animations
    pub fn subscription(&self) -> iced::Subscription<Message> {
        // Layout is recomputed on every resize
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        let close_sub = iced::window::close_events().map(Message::WindowClosed);

        // Frames only while a card is animating
        let animation_sub = if self.ui.has_active_animations() {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        iced::Subscription::batch([resize_sub, close_sub, animation_sub])
    }
}
