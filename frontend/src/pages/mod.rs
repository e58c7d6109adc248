pub mod about;
pub mod addons;
pub mod home;
pub mod tutorials;

pub use about::AboutPage;
pub use addons::AddonsPage;
pub use home::HomePage;
pub use tutorials::TutorialsPage;
