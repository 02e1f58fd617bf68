//! Single-column layout for narrow windows

use iced::widget::{Space, column, container, scrollable, text};
use iced::{Element, Fill, Padding};

use super::PageData;
use crate::app::Message;
use crate::ui::components::{AvatarPlacement, header, social_row};
use crate::ui::theme;
use crate::ui::widgets::lyrics_panel;

const BANNER_HEIGHT: f32 = 160.0;
const HORIZONTAL_PADDING: f32 = 24.0;
const BOTTOM_PADDING: f32 = 36.0;
const LYRICS_MAX_HEIGHT: f32 = 600.0;

pub fn view<'a>(data: PageData<'a>) -> Element<'a, Message> {
    let profile = data.profile;

    let header = header::view(
        data.banner,
        data.avatar,
        BANNER_HEIGHT,
        AvatarPlacement::Centered,
        data.density,
    );

    let socials = container(social_row::view(&profile.socials)).center_x(Fill);

    let body = column![
        text(profile.bio.as_str())
            .size(theme::BODY_SIZE)
            .font(theme::REGULAR),
        Space::new().height(30),
        lyrics_panel::view(profile.lyrics_text(), LYRICS_MAX_HEIGHT),
    ]
    .padding(
        Padding::new(0.0)
            .left(HORIZONTAL_PADDING)
            .right(HORIZONTAL_PADDING),
    );

    scrollable(
        column![
            header,
            Space::new().height(16),
            socials,
            Space::new().height(16),
            body,
        ]
        .width(Fill)
        .padding(Padding::new(0.0).bottom(BOTTOM_PADDING)),
    )
    .height(Fill)
    .style(theme::thin_scrollable)
    .into()
}
