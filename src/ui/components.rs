//! UI Components - page sections wired to application messages
//!
//! Components combine widgets with application logic. They are the only
//! layer besides pages that imports from `crate::app`.

pub mod footer;
pub mod header;
pub mod social_row;

pub use header::AvatarPlacement;
