//! StremioLabAR: Arabic community site for Stremio addons and tutorials.

mod app;
mod components;
mod config;
mod hooks;
mod i18n;
mod navigation_context;
mod pages;
mod seo;
mod utils;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <app::AppShell />
    }
}

fn main() {
    console_error_panic_hook::set_once();

    #[cfg(debug_assertions)]
    for problem in stremiolab_shared::content::validate_fixtures() {
        web_sys::console::warn_1(&format!("fixture: {problem}").into());
    }

    yew::Renderer::<App>::new().render();
}
