// Reusable components live here.

pub mod button;
pub mod footer;
pub mod icons;
pub mod image_with_loading;
pub mod navbar;
