//! Social link card
//!
//! A square brand-colored card with an icon in the top-left corner and a
//! label in the bottom-left. Hovering shrinks it slightly.
//!
//! The card is drawn inside a fixed-size slot and scaled within it, so the
//! surrounding layout does not move while the animation runs.

use iced::widget::{Space, button, column, container, mouse_area, svg, text};
use iced::{Color, Element, Fill};

use crate::ui::theme;

/// Content size of the card, excluding padding
pub const CARD_CONTENT: f32 = 120.0;
pub const CARD_PADDING: f32 = 24.0;
/// Size of the slot the card occupies in its parent
pub const CARD_SLOT: f32 = CARD_CONTENT + 2.0 * CARD_PADDING;

const ICON_SIZE: f32 = 36.0;

/// Create a social card element
///
/// # Arguments
/// * `icon` - SVG source of the brand icon
/// * `label` - Network name shown at the bottom
/// * `background` - Card fill
/// * `tint` - Icon and label color
/// * `scale` - Current hover scale, 1.0 at rest
/// * `on_press` - Message sent when the card is clicked
/// * `on_hover` / `on_unhover` - Messages for cursor enter / exit
#[allow(clippy::too_many_arguments)]
pub fn view<'a, Message: Clone + 'a>(
    icon: &'static str,
    label: &'a str,
    background: Color,
    tint: Color,
    scale: f32,
    on_press: Message,
    on_hover: Message,
    on_unhover: Message,
) -> Element<'a, Message> {
    let content_size = CARD_CONTENT * scale;

    let icon = svg(svg::Handle::from_memory(icon.as_bytes()))
        .width(ICON_SIZE * scale)
        .height(ICON_SIZE * scale)
        .style(move |_theme, _status| svg::Style { color: Some(tint) });

    let label = text(label)
        .size(theme::BODY_SIZE * scale)
        .font(theme::MEDIUM)
        .color(tint);

    let content = column![icon, Space::new().height(Fill), label]
        .width(content_size)
        .height(content_size);

    let card = button(content)
        .padding(CARD_PADDING * scale)
        .style(theme::social_card(background, tint, scale))
        .on_press(on_press);

    let slot = container(card).center(CARD_SLOT);

    mouse_area(slot)
        .on_enter(on_hover)
        .on_exit(on_unhover)
        .interaction(iced::mouse::Interaction::Pointer)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_fits_resting_card() {
        assert_eq!(CARD_SLOT, 168.0);
        assert!(CARD_SLOT >= (CARD_CONTENT + 2.0 * CARD_PADDING) * 0.9);
    }
}
