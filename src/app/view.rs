// src/app/view.rs
//! Application view rendering

use iced::widget::{Space, container};
use iced::{Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::breakpoint::LayoutMode;
use crate::ui::pages::{self, PageData};
use crate::ui::theme;

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let content: Element<'_, Message> = match self.page_data() {
            Some(data) => match self.ui.layout {
                LayoutMode::Expanded => pages::expanded::view(data),
                LayoutMode::Compact => pages::compact::view(data),
            },
            // Nothing is drawn until fonts and banner are in
            None => Space::new().width(Fill).height(Fill).into(),
        };

        container(content)
            .width(Fill)
            .height(Fill)
            .style(theme::page)
            .into()
    }

    /// Data for the page, or None while the preload gate is closed
    fn page_data(&self) -> Option<PageData<'_>> {
        if !self.core.gate.is_open() {
            return None;
        }
        let banner = self.assets.banner.as_ref()?;
        Some(PageData {
            profile: &self.core.settings.profile,
            banner,
            avatar: self.assets.avatar.as_ref(),
            card_hover: &self.ui.card_hover,
            density: self.core.viewport.density(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::app::{App, Message};
    use crate::features::{ResourceId, Settings};

    #[test]
    fn test_no_page_data_while_gate_closed() {
        let mut app = App::with_settings(Settings::default());
        assert!(app.page_data().is_none());

        let _ = app.update(Message::HeaderLoaded(Ok(
            iced::widget::image::Handle::from_bytes(vec![0u8; 8]),
        )));
        let _ = app.update(Message::ResourceReady(ResourceId::HeaderImage));
        let _ = app.update(Message::ResourceReady(ResourceId::RegularFont));
        assert!(app.page_data().is_none());

        let _ = app.update(Message::ResourceReady(ResourceId::MediumFont));
        assert!(app.page_data().is_some());
    }
}
