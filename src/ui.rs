//! UI module for the profile page
//!
//! # Architecture
//!
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Page sections with Message handling
//! - **Pages** (`pages`): Full compositions for each layout mode
//!
//! `density` and `breakpoint` hold the layout arithmetic the pages rely on.

pub mod animation;
pub mod breakpoint;
pub mod components;
pub mod density;
pub mod icons;
pub mod pages;
pub mod theme;
pub mod widgets;
