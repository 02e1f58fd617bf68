//! Header banner with the avatar overlapping its bottom edge

use iced::widget::{Space, column, container, image, stack};
use iced::{ContentFit, Element, Fill, Padding};

use crate::app::Message;
use crate::ui::density::{Density, UnitOffset};
use crate::ui::widgets::avatar;

pub const AVATAR_SIZE: f32 = 160.0;

/// Horizontal placement of the avatar
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AvatarPlacement {
    Centered,
    /// Offset from the left edge, in logical units
    Inset(f32),
}

/// Build the header
///
/// The avatar's centre sits on the banner's bottom edge. Offsets are snapped
/// to whole pixels so the circular image is not resampled across a seam.
pub fn view<'a>(
    banner: &image::Handle,
    avatar_handle: Option<&image::Handle>,
    banner_height: f32,
    placement: AvatarPlacement,
    density: Density,
) -> Element<'a, Message> {
    let banner = column![
        image(banner.clone())
            .width(Fill)
            .height(banner_height)
            .content_fit(ContentFit::Cover),
        Space::new().height(AVATAR_SIZE / 2.0),
    ];

    let avatar = avatar::view(avatar_handle, AVATAR_SIZE);

    let origin = avatar_origin(placement, banner_height, density);
    let positioned: Element<'a, Message> = match placement {
        AvatarPlacement::Centered => container(avatar)
            .width(Fill)
            .center_x(Fill)
            .padding(Padding::new(0.0).top(origin.y))
            .into(),
        AvatarPlacement::Inset(_) => container(avatar)
            .width(Fill)
            .padding(Padding::new(0.0).top(origin.y).left(origin.x))
            .into(),
    };

    stack![banner, positioned]
        .width(Fill)
        .height(banner_height + AVATAR_SIZE / 2.0)
        .into()
}

/// Top-left corner of the avatar, pixel-aligned. `x` is unused when centred.
fn avatar_origin(placement: AvatarPlacement, banner_height: f32, density: Density) -> UnitOffset {
    let left = match placement {
        AvatarPlacement::Centered => 0.0,
        AvatarPlacement::Inset(left) => left,
    };
    density.snap_offset(UnitOffset::new(left, banner_height - AVATAR_SIZE / 2.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_centre_on_banner_edge() {
        let origin = avatar_origin(AvatarPlacement::Inset(140.0), 250.0, Density::default());
        assert_eq!(origin, UnitOffset::new(140.0, 170.0));
        assert_eq!(origin.y + AVATAR_SIZE / 2.0, 250.0);
    }

    #[test]
    fn test_avatar_origin_is_pixel_aligned() {
        let density = Density::new(1.5);
        let origin = avatar_origin(AvatarPlacement::Inset(140.3), 160.0, density);
        let point = density.offset(origin);
        assert!((point.x - point.x.round()).abs() < 1e-3);
        assert!((point.y - point.y.round()).abs() < 1e-3);
    }
}
