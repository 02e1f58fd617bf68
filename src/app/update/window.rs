// src/app/update/window.rs
//! Window message handlers

use std::time::Instant;

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowOpened(id) => {
                tracing::info!("Main window opened: {:?}", id);
                self.core.window_id = Some(*id);
                Some(iced::window::scale_factor(*id).map(Message::ScaleFactorChanged))
            }

            Message::WindowResized(size) => {
                self.core.viewport.size = *size;
                if self.apply_breakpoints() {
                    tracing::debug!(
                        "Layout switched to {:?} at width {} ({:?})",
                        self.ui.layout,
                        size.width,
                        self.ui.size_class
                    );
                }
                // Moving to another monitor can change the scale factor too
                Some(
                    self.core
                        .window_id
                        .map(|id| iced::window::scale_factor(id).map(Message::ScaleFactorChanged))
                        .unwrap_or_else(Task::none),
                )
            }

            Message::ScaleFactorChanged(factor) => {
                if self.core.viewport.scale_factor != *factor {
                    self.core.viewport.scale_factor = *factor;
                    let size = self.core.viewport.size;
                    let physical = self.core.viewport.density().size(size.width, size.height);
                    tracing::debug!(
                        "Scale factor {:.2}, {}x{} physical pixels",
                        factor,
                        physical.width,
                        physical.height
                    );
                }
                Some(Task::none())
            }

            Message::WindowClosed(id) => {
                tracing::info!("Window {:?} closed, exiting", id);
                Some(iced::exit())
            }

            Message::AnimationTick => {
                self.ui.card_hover.tick(Instant::now());
                self.ui.card_hover.cleanup_completed();
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Settings;
    use crate::ui::breakpoint::{LayoutMode, WindowSizeClass};

    #[test]
    fn test_resize_recomputes_layout() {
        let mut app = App::with_settings(Settings::default());
        assert_eq!(app.ui.layout, LayoutMode::Expanded);

        let _ = app.update(Message::WindowResized(iced::Size::new(720.0, 900.0)));
        assert_eq!(app.ui.layout, LayoutMode::Compact);
        assert_eq!(app.ui.size_class, WindowSizeClass::Medium);

        let _ = app.update(Message::WindowResized(iced::Size::new(1024.0, 900.0)));
        assert_eq!(app.ui.layout, LayoutMode::Expanded);
        assert_eq!(app.core.viewport.size.width, 1024.0);
    }

    #[test]
    fn test_resize_honours_configured_thresholds() {
        let mut settings = Settings::default();
        settings.layout.expanded_min_width = 1500.0;
        let mut app = App::with_settings(settings);

        let _ = app.update(Message::WindowResized(iced::Size::new(1400.0, 900.0)));
        assert_eq!(app.ui.layout, LayoutMode::Compact);
    }

    #[test]
    fn test_scale_factor_updates_density() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.update(Message::ScaleFactorChanged(1.5));
        assert_eq!(app.core.viewport.density().factor(), 1.5);
        assert_eq!(app.core.viewport.density().round_to_pixels(250.0), 375);
    }
}
