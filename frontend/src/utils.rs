use chrono::Datelike;
use web_sys::console;
use yew::Callback;

/// Open `url` in a new browsing context. Failures stay in the browser:
/// they are logged and reported as `false`, never surfaced in the UI.
pub fn open_in_new_tab(url: &str) -> bool {
    let Some(window) = web_sys::window() else {
        console::error_1(&"window unavailable, cannot open link".into());
        return false;
    };
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => true,
        Ok(None) => {
            // popup blockers return null instead of throwing
            console::warn_1(&format!("Opening {url} was blocked").into());
            false
        },
        Err(err) => {
            console::error_1(&err);
            false
        },
    }
}

/// Opener used by the link buttons unless a page is given another one.
pub fn default_opener() -> Callback<String> {
    Callback::from(|url: String| {
        open_in_new_tab(&url);
    })
}

/// Click handler that hands exactly `url` to `opener`.
pub fn open_link(url: &str, opener: &Callback<String>) -> Callback<()> {
    let url = url.to_string();
    opener.reform(move |_: ()| url.clone())
}

/// Calendar year in the visitor's local time zone.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{cell::RefCell, rc::Rc};

    use yew::Callback;

    use super::open_link;

    /// Callback that records every value it is emitted with.
    pub(crate) fn recorder<T: 'static>() -> (Callback<T>, Rc<RefCell<Vec<T>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (Callback::from(move |value: T| sink.borrow_mut().push(value)), seen)
    }

    #[test]
    fn open_link_forwards_exact_url_once_per_click() {
        let (opener, opened) = recorder::<String>();
        let handler = open_link("https://example.com/a?b=1", &opener);

        handler.emit(());
        assert_eq!(*opened.borrow(), vec!["https://example.com/a?b=1".to_string()]);

        handler.emit(());
        assert_eq!(opened.borrow().len(), 2);
    }
}
