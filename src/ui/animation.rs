//! Animation helpers built on `iced_anim`

mod hover;

pub use hover::{HOVER_SCALE, HoverAnimations, REST_SCALE};
