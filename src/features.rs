//! Feature modules - logic separated from UI
//!
//! Features should not depend on UI components directly.

pub mod links;
pub mod preload;
pub mod profile;
pub mod settings;

pub use preload::{ResourceGate, ResourceId};
pub use profile::{Profile, SocialKind, SocialLink};
pub use settings::Settings;
