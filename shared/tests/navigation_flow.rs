//! End-to-end checks of the navigation model as the UI drives it.

use stremiolab_shared::{content, MobileMenu, Navigation, View};

#[test]
fn fresh_load_starts_on_home() {
    let nav = Navigation::default();
    assert_eq!(nav.current(), View::Home);
}

#[test]
fn home_browse_addons_cta_switches_to_addons() {
    let mut nav = Navigation::new();
    assert!(nav.navigate(View::Addons));
    assert_eq!(nav.current(), View::Addons);
    for other in [View::Home, View::Tutorials, View::About] {
        assert!(!nav.is_active(other));
    }
}

#[test]
fn mobile_selection_closes_menu_and_switches_view() {
    let mut nav = Navigation::new();
    let mut menu = MobileMenu::default();

    menu.toggle();
    assert!(menu.is_open());

    let target = menu.select(View::Tutorials);
    nav.navigate(target);

    assert!(!menu.is_open());
    assert_eq!(nav.current(), View::Tutorials);
}

#[test]
fn fixture_validation_emits_no_warnings() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    assert!(content::validate_fixtures().is_empty());
}
