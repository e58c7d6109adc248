use std::rc::Rc;

use stremiolab_shared::{Navigation, View};
use yew::prelude::*;

/// Root-owned navigation state, driven through `use_reducer`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationState(Navigation);

impl NavigationState {
    pub fn starting_at(view: View) -> Self {
        let mut navigation = Navigation::new();
        navigation.navigate(view);
        Self(navigation)
    }

    pub fn current(&self) -> View {
        self.0.current()
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self(Navigation::new())
    }
}

impl Reducible for NavigationState {
    type Action = View;

    fn reduce(self: Rc<Self>, view: View) -> Rc<Self> {
        let mut navigation = self.0;
        if navigation.navigate(view) {
            Rc::new(Self(navigation))
        } else {
            // unchanged
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_starts_on_home() {
        assert_eq!(NavigationState::default().current(), View::Home);
    }

    #[test]
    fn reduce_switches_view() {
        let state = Rc::new(NavigationState::default());
        let next = state.reduce(View::About);
        assert_eq!(next.current(), View::About);
    }

    #[test]
    fn reducing_to_same_view_keeps_allocation() {
        let state = Rc::new(NavigationState::starting_at(View::Addons));
        let next = state.clone().reduce(View::Addons);
        assert!(Rc::ptr_eq(&state, &next));
    }
}
