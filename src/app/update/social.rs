// src/app/update/social.rs
//! Social card hover and link handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::links;

impl App {
    pub fn handle_social(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::HoverSocial(kind) => {
                self.ui.card_hover.set_hovered_exclusive(*kind);
                if let Some(kind) = kind {
                    tracing::trace!(
                        "Hovering {:?}, scale target {}",
                        kind,
                        self.ui.card_hover.target_scale(kind)
                    );
                }
                Some(Task::none())
            }

            Message::OpenLink(url) => {
                if let Err(e) = links::open_url(url) {
                    tracing::error!("{}", e);
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
    use crate::features::{Settings, SocialKind};
    use crate::ui::animation::{HOVER_SCALE, REST_SCALE};

    #[test]
    fn test_hover_messages_drive_scale_target() {
        let mut app = App::with_settings(Settings::default());
        let github = SocialKind::Github;

        for _ in 0..3 {
            let _ = app.update(Message::HoverSocial(Some(github)));
            assert_eq!(app.ui.card_hover.target_scale(&github), HOVER_SCALE);
        }

        for _ in 0..3 {
            let _ = app.update(Message::HoverSocial(None));
            assert_eq!(app.ui.card_hover.target_scale(&github), REST_SCALE);
        }
    }
}
