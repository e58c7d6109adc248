use yew::prelude::*;

use crate::{
    config,
    i18n::{current::footer as t, fill_two},
    utils::current_year,
};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class={classes!("bg-black", "border-t", "border-white/10", "py-8", "mt-auto")}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-4", "text-center")}>
                <p class={classes!("text-gray-500", "mb-2")}>
                    { fill_two(t::COPYRIGHT_TEMPLATE, current_year(), config::APP_NAME) }
                </p>
                <p class={classes!("text-gray-700", "text-sm")}>{ t::TAGLINE }</p>
            </div>
        </footer>
    }
}
