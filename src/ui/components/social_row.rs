//! Row of small brand icons used by the compact layout

use iced::widget::{Row, Space, button, svg};
use iced::{Alignment, Element};

use crate::app::Message;
use crate::features::SocialLink;
use crate::ui::{icons, theme};

const ICON_SIZE: f32 = 28.0;
const ICON_SPACING: f32 = 36.0;

pub fn view<'a>(links: &'a [SocialLink]) -> Element<'a, Message> {
    let mut row = Row::new().align_y(Alignment::Center);

    for (i, link) in links.iter().enumerate() {
        if i > 0 {
            row = row.push(Space::new().width(ICON_SPACING));
        }
        let kind = link.kind;
        let icon = svg(svg::Handle::from_memory(icons::for_kind(kind).as_bytes()))
            .width(ICON_SIZE)
            .height(ICON_SIZE)
            .style(move |theme, _status| svg::Style {
                color: Some(theme::brand_tint(theme, kind)),
            });
        row = row.push(
            button(icon)
                .padding(0)
                .style(theme::bare_button)
                .on_press(Message::OpenLink(link.url.clone())),
        );
    }

    row.into()
}
