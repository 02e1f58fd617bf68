//! Lyrics snippet with a vertical accent bar

use iced::widget::{Space, container, row, scrollable, text};
use iced::{Element, Fill, Shrink};

use crate::ui::theme;

const BAR_WIDTH: f32 = 5.0;
const BAR_GAP: f32 = 24.0;
const MAX_TEXT_WIDTH: f32 = 300.0;

/// Create a lyrics panel as tall as its text
///
/// The bar follows the text height. Text taller than `max_height` scrolls.
pub fn view<'a, Message: 'a>(lyrics: String, max_height: f32) -> Element<'a, Message> {
    let bar = container(Space::new().width(BAR_WIDTH).height(Fill))
        .width(BAR_WIDTH)
        .height(Fill)
        .style(theme::lyrics_bar_style);

    let lines = text(lyrics)
        .size(theme::BODY_SIZE)
        .font(theme::REGULAR)
        .color(theme::TEXT_MUTED);

    let scroll = scrollable(lines)
        .height(Shrink)
        .style(theme::thin_scrollable);

    row![
        bar,
        Space::new().width(BAR_GAP),
        container(scroll)
            .max_width(MAX_TEXT_WIDTH)
            .max_height(max_height),
    ]
    .height(Shrink)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Profile;

    /// iced's default relative line height
    fn text_height(line_count: usize) -> f32 {
        line_count as f32 * theme::BODY_SIZE * 1.3
    }

    #[test]
    fn test_default_lyrics_fit_without_scrolling() {
        let lines = Profile::default().lyrics.len();
        assert!(text_height(lines) < 480.0);
    }

    #[test]
    fn test_builds_for_any_cap() {
        let _panel: Element<'_, ()> = view("a\nb".to_string(), 0.0);
        let _panel: Element<'_, ()> = view(String::new(), 480.0);
    }
}
