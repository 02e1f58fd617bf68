// src/app/state.rs
//! Application state definitions

use iced::Size;
use iced::widget::image;

use crate::features::{ResourceGate, Settings, SocialKind};
use crate::ui::animation::HoverAnimations;
use crate::ui::breakpoint::{self, LayoutMode, WindowSizeClass};
use crate::ui::density::Density;

/// Initial window size, also used until the first resize event arrives
pub const INITIAL_WINDOW_SIZE: Size = Size::new(1280.0, 800.0);

/// Main application state
pub struct App {
    /// Settings, window and preload bookkeeping
    pub core: CoreState,
    /// Loaded images
    pub assets: AssetState,
    /// Layout and animation state
    pub ui: UiState,
}

pub struct CoreState {
    pub settings: Settings,
    pub gate: ResourceGate,
    pub window_id: Option<iced::window::Id>,
    pub viewport: Viewport,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            gate: ResourceGate::new(),
            window_id: None,
            viewport: Viewport::default(),
        }
    }
}

/// Last known window geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Logical size
    pub size: Size,
    /// Physical pixels per logical unit
    pub scale_factor: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size: INITIAL_WINDOW_SIZE,
            scale_factor: 1.0,
        }
    }
}

impl Viewport {
    pub fn density(&self) -> Density {
        Density::new(self.scale_factor)
    }
}

#[derive(Default)]
pub struct AssetState {
    /// Header banner, present once its preload finished
    pub banner: Option<image::Handle>,
    /// Remote avatar; the page shows a placeholder until it arrives
    pub avatar: Option<image::Handle>,
}

pub struct UiState {
    pub size_class: WindowSizeClass,
    pub layout: LayoutMode,
    pub card_hover: HoverAnimations<SocialKind>,
}

impl UiState {
    pub fn new(settings: &Settings) -> Self {
        let (size_class, layout) = breakpoint::layout_for_width(
            INITIAL_WINDOW_SIZE.width,
            &settings.layout.breakpoints(),
        );
        Self {
            size_class,
            layout,
            card_hover: HoverAnimations::new(),
        }
    }

    pub fn has_active_animations(&self) -> bool {
        self.card_hover.is_animating()
    }
}

impl App {
    /// Build the state without starting any tasks
    pub fn with_settings(settings: Settings) -> Self {
        let ui = UiState::new(&settings);
        Self {
            core: CoreState::new(settings),
            assets: AssetState::default(),
            ui,
        }
    }

    /// Recompute size class and layout for the current viewport
    ///
    /// Returns true when the layout mode changed.
    pub fn apply_breakpoints(&mut self) -> bool {
        let (size_class, layout) = breakpoint::layout_for_width(
            self.core.viewport.size.width,
            &self.core.settings.layout.breakpoints(),
        );
        let changed = layout != self.ui.layout;
        self.ui.size_class = size_class;
        self.ui.layout = layout;
        changed
    }
}
