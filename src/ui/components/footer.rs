//! "Build with" credit line

use iced::widget::{Space, row, svg, text};
use iced::{Alignment, Element};

use crate::app::Message;
use crate::ui::{icons, theme};

pub fn view<'a>() -> Element<'a, Message> {
    row![
        text("Build with iced")
            .size(theme::CAPTION_SIZE)
            .font(theme::REGULAR)
            .color(theme::TEXT_MUTED),
        Space::new().width(6),
        svg(svg::Handle::from_memory(icons::ICED.as_bytes()))
            .width(24)
            .height(24),
    ]
    .align_y(Alignment::Center)
    .into()
}
