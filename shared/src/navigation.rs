//! Navigation state: the active view held at the composition root and the
//! navbar's mobile overlay flag.

use crate::view::View;

/// The single piece of shared application state.
///
/// Owned by the root component and mutated only through [`Navigation::navigate`].
/// Never persisted, so every fresh load starts on [`View::Home`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigation {
    current: View,
}

impl Navigation {
    /// Starts on the home view.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active view.
    pub fn current(&self) -> View {
        self.current
    }

    /// Whether `view` is the active one.
    pub fn is_active(&self, view: View) -> bool {
        self.current == view
    }

    /// Switches to `view`. Every view is always accepted.
    ///
    /// Returns `true` when the active view actually changed.
    pub fn navigate(&mut self, view: View) -> bool {
        let changed = self.current != view;
        tracing::debug!(from = %self.current, to = %view, changed, "navigate");
        self.current = view;
        changed
    }
}

/// Expanded/collapsed flag of the navbar's mobile overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// Whether the overlay is expanded.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the overlay.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Collapses the overlay.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Picks a destination from the overlay: the menu closes and the view to
    /// hand to the navigation callback is returned.
    pub fn select(&mut self, view: View) -> View {
        self.close();
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_home() {
        let nav = Navigation::new();
        assert_eq!(nav.current(), View::Home);
        assert!(nav.is_active(View::Home));
        assert!(!nav.is_active(View::About));
    }

    #[test]
    fn navigate_reports_change() {
        let mut nav = Navigation::new();
        assert!(nav.navigate(View::Tutorials));
        assert!(!nav.navigate(View::Tutorials));
        assert_eq!(nav.current(), View::Tutorials);
    }

    #[test]
    fn exactly_one_view_is_active() {
        let mut nav = Navigation::new();
        for target in View::ALL {
            nav.navigate(target);
            let active: Vec<_> = View::ALL.into_iter().filter(|v| nav.is_active(*v)).collect();
            assert_eq!(active, vec![target]);
        }
    }

    #[test]
    fn menu_toggle_parity() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        for n in 1..=7 {
            menu.toggle();
            assert_eq!(menu.is_open(), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn close_is_idempotent() {
        let mut menu = MobileMenu::default();
        menu.close();
        assert!(!menu.is_open());
        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn select_closes_menu_and_returns_target() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert_eq!(menu.select(View::About), View::About);
        assert!(!menu.is_open());
    }
}
