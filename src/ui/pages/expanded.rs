//! Wide layout: inset avatar, lyrics beside the social cards

use iced::widget::{Row, Space, column, container, scrollable, text};
use iced::{Alignment, Color, Element, Fill, Padding};

use super::PageData;
use crate::app::Message;
use crate::ui::components::{AvatarPlacement, footer, header};
use crate::ui::widgets::{lyrics_panel, social_card};
use crate::ui::{icons, theme};

const BANNER_HEIGHT: f32 = 250.0;
const HORIZONTAL_PADDING: f32 = 140.0;
const BIO_MAX_WIDTH: f32 = 500.0;
const LYRICS_MAX_HEIGHT: f32 = 480.0;
const CARD_SPACING: f32 = 46.0;

pub fn view<'a>(data: PageData<'a>) -> Element<'a, Message> {
    let profile = data.profile;

    let header = header::view(
        data.banner,
        data.avatar,
        BANNER_HEIGHT,
        AvatarPlacement::Inset(HORIZONTAL_PADDING),
        data.density,
    );

    let bio = container(
        text(profile.bio.as_str())
            .size(theme::BODY_SIZE)
            .font(theme::REGULAR),
    )
    .max_width(BIO_MAX_WIDTH);

    let mut showcase = Row::new()
        .align_y(Alignment::End)
        .push(lyrics_panel::view(profile.lyrics_text(), LYRICS_MAX_HEIGHT));

    for (i, link) in profile.socials.iter().enumerate() {
        if i > 0 {
            showcase = showcase.push(Space::new().width(CARD_SPACING));
        }
        showcase = showcase.push(social_card::view(
            icons::for_kind(link.kind),
            link.label.as_str(),
            theme::brand(link.kind),
            Color::WHITE,
            data.card_hover.scale(&link.kind),
            Message::OpenLink(link.url.clone()),
            Message::HoverSocial(Some(link.kind)),
            Message::HoverSocial(None),
        ));
    }

    let body = column![
        bio,
        Space::new().height(26),
        showcase,
        Space::new().height(30),
        footer::view(),
        Space::new().height(30),
    ]
    .padding(
        Padding::new(0.0)
            .left(HORIZONTAL_PADDING)
            .right(HORIZONTAL_PADDING),
    );

    scrollable(column![header, Space::new().height(30), body].width(Fill))
        .height(Fill)
        .style(theme::thin_scrollable)
        .into()
}
