//! Model shared by the StremioLabAR site: the view set, navigation state and
//! the static content fixtures.

pub mod content;
pub mod error;
pub mod navigation;
pub mod view;

pub use content::{Addon, Profile, SocialLink, SocialPlatform, Tutorial};
pub use error::{Error, Result};
pub use navigation::{MobileMenu, Navigation};
pub use view::View;
