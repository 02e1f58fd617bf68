//! Theme system for the profile page
//! Light by default, with a dark variant selectable in settings

use iced::color;
use iced::font::{Family, Weight};
use iced::widget::{button, container, scrollable};
use iced::{Background, Border, Color, Font, Shadow, Theme, Vector};

use crate::features::SocialKind;

// ============================================================================
// Fonts
// ============================================================================

/// Family name embedded in the bundled font files
pub const FONT_FAMILY: &str = "Alibaba PuHuiTi 3.0";

pub const REGULAR: Font = Font {
    family: Family::Name(FONT_FAMILY),
    weight: Weight::Normal,
    ..Font::DEFAULT
};

pub const MEDIUM: Font = Font {
    family: Family::Name(FONT_FAMILY),
    weight: Weight::Medium,
    ..Font::DEFAULT
};

pub const BODY_SIZE: f32 = 20.0;
pub const CAPTION_SIZE: f32 = 13.0;

// ============================================================================
// Color Palette
// ============================================================================

fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x121212);
    pub const TEXT_PRIMARY: Color = color!(0xf2f2f2);
    pub const LYRICS_BAR: Color = color!(0x3a3a3a);
    pub const PLACEHOLDER: Color = color!(0x2a2a2a);
}

mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const TEXT_PRIMARY: Color = color!(0x000000);
    pub const LYRICS_BAR: Color = color!(0xd3d3d3);
    pub const PLACEHOLDER: Color = color!(0xe6e6e6);
}

/// Secondary text (lyrics, footer)
pub const TEXT_MUTED: Color = color!(0x8b8b8b);

pub const GITHUB: Color = color!(0x181717);
pub const SOUNDCLOUD: Color = color!(0xff5500);

pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

pub fn lyrics_bar(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::LYRICS_BAR
    } else {
        light::LYRICS_BAR
    }
}

pub fn placeholder_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::PLACEHOLDER
    } else {
        light::PLACEHOLDER
    }
}

/// Brand color of a social network
pub fn brand(kind: SocialKind) -> Color {
    match kind {
        SocialKind::Github => GITHUB,
        SocialKind::SoundCloud => SOUNDCLOUD,
    }
}

/// Brand color usable as an icon tint on the page background
///
/// GitHub's near-black disappears on the dark background.
pub fn brand_tint(theme: &Theme, kind: SocialKind) -> Color {
    match kind {
        SocialKind::Github if is_dark(theme) => dark::TEXT_PRIMARY,
        _ => brand(kind),
    }
}

// ============================================================================
// Container Styles
// ============================================================================

pub fn page(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Circular frame with a soft drop shadow around the avatar
pub fn avatar_frame(size: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        border: Border {
            radius: (size / 2.0).into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

pub fn avatar_placeholder(size: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme| container::Style {
        background: Some(Background::Color(placeholder_bg(theme))),
        border: Border {
            radius: (size / 2.0).into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// The thin rounded bar left of the lyrics
pub fn lyrics_bar_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(lyrics_bar(theme))),
        border: Border {
            radius: 2.5.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

pub const CARD_RADIUS: f32 = 24.0;

/// Filled social card, corners scaled along with the card
pub fn social_card(
    background: Color,
    tint: Color,
    scale: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = match status {
            button::Status::Pressed => Color {
                a: 0.85,
                ..background
            },
            _ => background,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: tint,
            border: Border {
                radius: (CARD_RADIUS * scale).into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Bare icon button without background or ripple
pub fn bare_button(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        ..Default::default()
    }
}

// ============================================================================
// Scrollable Styles
// ============================================================================

/// Scrollbar that only shows a thin scroller
pub fn thin_scrollable(theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let rail = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(lyrics_bar(theme)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail.clone(),
        horizontal_rail: rail,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(background(theme)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: TEXT_MUTED,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_colors() {
        assert_eq!(brand(SocialKind::Github), color!(0x181717));
        assert_eq!(brand(SocialKind::SoundCloud), color!(0xff5500));
    }

    #[test]
    fn test_github_tint_visible_on_dark() {
        assert_eq!(brand_tint(&Theme::Light, SocialKind::Github), GITHUB);
        assert_ne!(brand_tint(&Theme::Dark, SocialKind::Github), GITHUB);
        assert_eq!(brand_tint(&Theme::Dark, SocialKind::SoundCloud), SOUNDCLOUD);
    }
}
