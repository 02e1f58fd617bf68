//! Responsive breakpoints
//!
//! The page has two compositions. Which one is shown depends on the
//! current viewport width and its window size class, and is recomputed on
//! every resize.

/// Coarse width bucket of the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WindowSizeClass {
    Compact,
    Medium,
    Expanded,
}

/// Which page composition to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Single column, centred avatar, icon row for socials
    Compact,
    /// Wide header, side-by-side lyrics and social cards
    Expanded,
}

/// Width thresholds, in logical units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    /// Narrowest width classed as medium
    pub medium_min: f32,
    /// Narrowest width classed as expanded
    pub expanded_class_min: f32,
    /// Narrowest width that may use the expanded layout
    pub expanded_layout_min: f32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            medium_min: 600.0,
            expanded_class_min: 840.0,
            expanded_layout_min: 1000.0,
        }
    }
}

impl WindowSizeClass {
    pub fn from_width(width: f32, breakpoints: &Breakpoints) -> Self {
        if width < breakpoints.medium_min {
            Self::Compact
        } else if width < breakpoints.expanded_class_min {
            Self::Medium
        } else {
            Self::Expanded
        }
    }
}

/// Pick the layout for a viewport width and its size class
///
/// Anything narrower than `expanded_layout_min` is compact. Wider windows
/// only get the expanded layout when their size class agrees.
pub fn select_layout(
    width: f32,
    size_class: WindowSizeClass,
    breakpoints: &Breakpoints,
) -> LayoutMode {
    if width < breakpoints.expanded_layout_min {
        LayoutMode::Compact
    } else if size_class == WindowSizeClass::Expanded {
        LayoutMode::Expanded
    } else {
        LayoutMode::Compact
    }
}

/// Size class and layout for a width in one step
pub fn layout_for_width(width: f32, breakpoints: &Breakpoints) -> (WindowSizeClass, LayoutMode) {
    let size_class = WindowSizeClass::from_width(width, breakpoints);
    (size_class, select_layout(width, size_class, breakpoints))
}
