//! Application messages

use iced::widget::image;

use crate::features::{ResourceId, SocialKind};

/// Application messages
#[derive(Clone)]
pub enum Message {
    // ============ Window ============
    /// Main window opened
    WindowOpened(iced::window::Id),
    /// Window resized (logical size)
    WindowResized(iced::Size),
    /// Scale factor of the window reported
    ScaleFactorChanged(f32),
    /// Window closed
    WindowClosed(iced::window::Id),
    /// Frame tick while an animation is running
    AnimationTick,

    // ============ Preload ============
    /// Raw font file read from disk
    FontFileLoaded(ResourceId, Result<Vec<u8>, String>),
    /// Header image read and decoded
    HeaderLoaded(Result<image::Handle, String>),
    /// A gated resource finished loading
    ResourceReady(ResourceId),
    /// A gated resource failed to load
    ResourceFailed(ResourceId, String),
    /// Remote avatar downloaded
    AvatarLoaded(Result<image::Handle, String>),

    // ============ Social ============
    /// Cursor entered a social card, or left all of them
    HoverSocial(Option<SocialKind>),
    /// Open an external link
    OpenLink(String),
}

// Manual Debug implementation to avoid dumping font bytes into logs
impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => { write!(f, concat!($name, "({})"), format_args!($($arg)*)) };
        }

        match self {
            Self::AnimationTick => simple!("AnimationTick"),

            Self::WindowOpened(id) => simple!("WindowOpened", "{:?}", id),
            Self::WindowResized(size) => simple!("WindowResized", "{}x{}", size.width, size.height),
            Self::ScaleFactorChanged(factor) => simple!("ScaleFactorChanged", "{:.2}", factor),
            Self::WindowClosed(id) => simple!("WindowClosed", "{:?}", id),

            Self::FontFileLoaded(id, Ok(bytes)) => {
                simple!("FontFileLoaded", "{}, {} bytes", id, bytes.len())
            }
            Self::FontFileLoaded(id, Err(e)) => simple!("FontFileLoaded", "{}, error: {}", id, e),
            Self::HeaderLoaded(result) => simple!("HeaderLoaded", "ok={}", result.is_ok()),
            Self::ResourceReady(id) => simple!("ResourceReady", "{}", id),
            Self::ResourceFailed(id, e) => simple!("ResourceFailed", "{}: {}", id, e),
            Self::AvatarLoaded(result) => simple!("AvatarLoaded", "ok={}", result.is_ok()),

            Self::HoverSocial(kind) => simple!("HoverSocial", "{:?}", kind),
            Self::OpenLink(url) => simple!("OpenLink", "{}", url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_font_bytes() {
        let msg = Message::FontFileLoaded(ResourceId::RegularFont, Ok(vec![0u8; 4096]));
        assert_eq!(format!("{:?}", msg), "FontFileLoaded(regular font, 4096 bytes)");
    }

    #[test]
    fn test_debug_simple_variants() {
        assert_eq!(format!("{:?}", Message::AnimationTick), "AnimationTick");
        assert_eq!(
            format!("{:?}", Message::HoverSocial(Some(SocialKind::Github))),
            "HoverSocial(Some(Github))"
        );
    }
}
