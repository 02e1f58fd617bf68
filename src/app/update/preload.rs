// src/app/update/preload.rs
//! Resource preload handlers
//!
//! Fonts go through two steps: the file is read, then registered with the
//! renderer. The header image is ready once read and recognised.

use iced::Task;

use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::App;
use crate::features::ResourceId;

impl App {
    /// Start loading everything the page needs
    pub fn start_preload(&self) -> Task<Message> {
        let assets = &self.core.settings.assets;
        let profile = &self.core.settings.profile;

        let font = |id: ResourceId, path: std::path::PathBuf| {
            Task::perform(helpers::read_asset(path), move |result| {
                Message::FontFileLoaded(id, result.map_err(|e| format!("{:#}", e)))
            })
        };

        Task::batch([
            font(ResourceId::RegularFont, assets.regular_font_path()),
            font(ResourceId::MediumFont, assets.medium_font_path()),
            Task::perform(
                helpers::load_header_image(assets.header_image_path()),
                |result| Message::HeaderLoaded(result.map_err(|e| format!("{:#}", e))),
            ),
            Task::perform(
                helpers::fetch_avatar(
                    profile.avatar_url.clone(),
                    self.core.settings.network.clone(),
                ),
                |result| Message::AvatarLoaded(result.map_err(|e| format!("{:#}", e))),
            ),
        ])
    }

    /// Handle preload messages
    pub fn handle_preload(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::FontFileLoaded(id, result) => {
                let id = *id;
                match result {
                    Ok(bytes) => Some(iced::font::load(bytes.clone()).map(move |result| {
                        match result {
                            Ok(()) => Message::ResourceReady(id),
                            Err(e) => Message::ResourceFailed(id, format!("{:?}", e)),
                        }
                    })),
                    Err(e) => Some(Task::done(Message::ResourceFailed(id, e.clone()))),
                }
            }

            Message::HeaderLoaded(result) => match result {
                Ok(handle) => {
                    self.assets.banner = Some(handle.clone());
                    Some(Task::done(Message::ResourceReady(ResourceId::HeaderImage)))
                }
                Err(e) => Some(Task::done(Message::ResourceFailed(
                    ResourceId::HeaderImage,
                    e.clone(),
                ))),
            },

            Message::ResourceReady(id) => {
                if self.core.gate.mark_ready(*id) {
                    tracing::info!("All resources loaded, showing page");
                } else {
                    tracing::debug!(
                        "Resource ready: {}, waiting on {:?}",
                        id,
                        self.core.gate.pending()
                    );
                }
                Some(Task::none())
            }

            Message::ResourceFailed(id, reason) => {
                tracing::error!("Failed to load {}: {}", id, reason);
                self.core.gate.mark_failed(*id, reason.clone());
                tracing::error!(
                    "Page stays hidden, {} resource(s) failed",
                    self.core.gate.failures().len()
                );
                Some(Task::none())
            }

            Message::AvatarLoaded(result) => {
                match result {
                    Ok(handle) => self.assets.avatar = Some(handle.clone()),
                    Err(e) => tracing::warn!("Avatar unavailable, keeping placeholder: {}", e),
                }
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
    use crate::features::preload::ResourceStatus;

    fn app() -> App {
        App::with_settings(Settings::default())
    }

    #[test]
    fn test_page_gated_until_all_resources() {
        let mut app = app();
        let _ = app.update(Message::ResourceReady(ResourceId::RegularFont));
        let _ = app.update(Message::ResourceReady(ResourceId::MediumFont));
        assert!(!app.core.gate.is_open());

        let _ = app.update(Message::HeaderLoaded(Ok(iced::widget::image::Handle::from_bytes(
            vec![0u8; 8],
        ))));
        assert!(app.assets.banner.is_some());
        // The banner handle alone does not open the gate; ResourceReady does
        assert!(!app.core.gate.is_open());

        let _ = app.update(Message::ResourceReady(ResourceId::HeaderImage));
        assert!(app.core.gate.is_open());
    }

    #[test]
    fn test_failed_resource_recorded() {
        let mut app = app();
        let _ = app.update(Message::ResourceFailed(
            ResourceId::MediumFont,
            "missing".to_string(),
        ));
        assert_eq!(
            *app.core.gate.status(ResourceId::MediumFont),
            ResourceStatus::Failed("missing".to_string())
        );
        assert!(!app.core.gate.is_open());
    }

    #[test]
    fn test_avatar_failure_keeps_placeholder() {
        let mut app = app();
        let _ = app.update(Message::AvatarLoaded(Err("timeout".to_string())));
        assert!(app.assets.avatar.is_none());
        assert!(!app.core.gate.is_open());
    }
}
