use stremiolab_shared::View;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

/// Scroll the viewport back to the top whenever the active view changes.
#[hook]
pub fn use_scroll_to_top(view: View) {
    use_effect_with(view, move |_| {
        scroll_window_to_top();
        || ()
    });
}

fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Vertical scroll offset of the window, in CSS pixels.
///
/// Only the `parallax` feature wires a `scroll` listener; otherwise the value
/// stays at 0 and the hero backdrop never moves.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state(|| 0.0_f64);

    #[cfg(feature = "parallax")]
    {
        let scroll_y = scroll_y.clone();
        use_effect_with((), move |_| {
            use wasm_bindgen::{closure::Closure, JsCast};

            let window = web_sys::window();
            let closure = window.clone().map(|window| {
                let scroll_y = scroll_y.clone();
                Closure::<dyn Fn()>::new(move || {
                    scroll_y.set(window.scroll_y().unwrap_or(0.0));
                })
            });

            if let (Some(window), Some(closure)) = (window.as_ref(), closure.as_ref()) {
                if let Err(err) = window
                    .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
                {
                    web_sys::console::error_1(&err);
                }
            }

            move || {
                if let (Some(window), Some(closure)) = (window, closure) {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    *scroll_y
}

/// Inline `transform` for a backdrop layer moving at `factor` times the
/// scroll speed.
pub fn parallax_offset(scroll_y: f64, factor: f64) -> String {
    format!("transform: translateY({}px)", scroll_y * factor)
}

#[cfg(test)]
mod tests {
    use super::parallax_offset;

    #[test]
    fn offset_scales_with_factor() {
        assert_eq!(parallax_offset(100.0, 0.4), "transform: translateY(40px)");
        assert_eq!(parallax_offset(100.0, -0.2), "transform: translateY(-20px)");
    }

    #[test]
    fn resting_offset_is_zero() {
        assert_eq!(parallax_offset(0.0, 0.1), "transform: translateY(0px)");
    }
}
