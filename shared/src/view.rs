//! The closed set of pages the site can show.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the four mutually exclusive pages the site can show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Landing hero with the two calls to action.
    #[default]
    Home,
    /// Featured addon.
    Addons,
    /// Featured tutorial.
    Tutorials,
    /// Site and developer identity cards.
    About,
}

impl View {
    /// Every destination, in navbar order.
    pub const ALL: [View; 4] = [View::Home, View::Addons, View::Tutorials, View::About];

    /// Stable lowercase identifier, used for `data-view` markers and logs.
    pub fn slug(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Addons => "addons",
            View::Tutorials => "tutorials",
            View::About => "about",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        View::ALL
            .into_iter()
            .find(|view| view.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownView(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_is_home() {
        assert_eq!(View::default(), View::Home);
    }

    #[test]
    fn all_lists_navbar_order_without_duplicates() {
        assert_eq!(View::ALL, [View::Home, View::Addons, View::Tutorials, View::About]);
        let unique: std::collections::HashSet<_> = View::ALL.iter().collect();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn parses_slugs_case_insensitively() {
        assert_eq!(" Addons ".parse::<View>().unwrap(), View::Addons);
        assert_eq!("ABOUT".parse::<View>().unwrap(), View::About);
        for view in View::ALL {
            assert_eq!(view.to_string().parse::<View>().unwrap(), view);
        }
    }

    #[test]
    fn rejects_unknown_slug() {
        let err = "settings".parse::<View>().unwrap_err();
        assert!(matches!(err, Error::UnknownView(ref raw) if raw == "settings"));
        assert_eq!(err.to_string(), "unknown view `settings`");
    }

    #[test]
    fn serializes_as_lowercase_slug() {
        let json = serde_json::to_string(&View::Tutorials).unwrap();
        assert_eq!(json, "\"tutorials\"");
    }
}
