//! Circular avatar image with a drop shadow

use iced::widget::{Space, container, image};
use iced::{ContentFit, Element};

use crate::ui::theme;

/// Create an avatar element
///
/// Shows a muted circle until `handle` is available.
pub fn view<'a, Message: 'a>(handle: Option<&image::Handle>, size: f32) -> Element<'a, Message> {
    match handle {
        Some(handle) => container(
            image(handle.clone())
                .width(size)
                .height(size)
                .content_fit(ContentFit::Cover)
                .border_radius(size / 2.0),
        )
        .width(size)
        .height(size)
        .style(theme::avatar_frame(size))
        .into(),
        None => container(Space::new().width(size).height(size))
            .width(size)
            .height(size)
            .style(theme::avatar_placeholder(size))
            .into(),
    }
}
