//! Reusable UI widgets - composable pieces without business logic
//!
//! Widgets must not import from `crate::app`; they take plain data and
//! generic messages.

pub mod avatar;
pub mod lyrics_panel;
pub mod social_card;
