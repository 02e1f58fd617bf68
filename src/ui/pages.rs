//! Page compositions, one per layout mode

pub mod compact;
pub mod expanded;

use iced::widget::image;

use crate::features::{Profile, SocialKind};
use crate::ui::animation::HoverAnimations;
use crate::ui::density::Density;

/// Everything a page needs to render, borrowed from the app state
pub struct PageData<'a> {
    pub profile: &'a Profile,
    pub banner: &'a image::Handle,
    pub avatar: Option<&'a image::Handle>,
    pub card_hover: &'a HoverAnimations<SocialKind>,
    pub density: Density,
}
