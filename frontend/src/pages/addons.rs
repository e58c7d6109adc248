use stremiolab_shared::{content, Addon, View};
use yew::prelude::*;

use crate::{
    components::{
        button::{Button, ButtonSize},
        icons::{Icon, IconName},
        image_with_loading::ImageWithLoading,
    },
    i18n::{current::addons as t, fill_one},
    utils::{default_opener, open_link},
};

/// The install button opens the addon's configure page and nothing else.
pub fn install_handler(addon: &Addon, opener: &Callback<String>) -> Callback<()> {
    open_link(&addon.install_url, opener)
}

#[derive(Properties, PartialEq)]
pub struct AddonsPageProps {
    #[prop_or_else(default_opener)]
    pub opener: Callback<String>,
}

#[function_component(AddonsPage)]
pub fn addons_page(props: &AddonsPageProps) -> Html {
    let addon = use_memo((), |_| content::featured_addon());

    let install = install_handler(&addon, &props.opener).reform(|_: MouseEvent| ());

    html! {
        <div
            data-view={View::Addons.slug()}
            class={classes!(
                "pt-28", "pb-12", "px-4", "max-w-5xl", "mx-auto",
                "min-h-screen", "animate-fadeIn"
            )}
        >
            <div class={classes!("text-center", "mb-12")}>
                <h2 class={classes!("text-3xl", "md:text-4xl", "font-bold", "text-white", "mb-4")}>
                    { t::HEADING }
                </h2>
                <p class="text-gray-400">{ t::SUBHEADING }</p>
            </div>

            <div class={classes!(
                "bg-brand-card", "border", "border-white/10", "rounded-3xl",
                "overflow-hidden", "shadow-2xl", "shadow-brand-purple/10"
            )}>
                <div class={classes!("grid", "md:grid-cols-2", "gap-0")}>
                    <div class={classes!("h-64", "md:h-auto", "bg-black", "relative")}>
                        <ImageWithLoading
                            src={addon.image_url.clone()}
                            alt={addon.name.clone()}
                            container_class={classes!("w-full", "h-full")}
                            class={classes!("w-full", "h-full", "object-cover", "opacity-90")}
                        />
                        <div class={classes!(
                            "absolute", "inset-0", "pointer-events-none",
                            "bg-gradient-to-t", "from-brand-card", "via-transparent", "to-transparent",
                            "md:bg-gradient-to-r", "md:from-brand-card",
                            "md:via-transparent", "md:to-transparent"
                        )}></div>
                    </div>

                    <div class={classes!("p-8", "md:p-12", "flex", "flex-col", "justify-center")}>
                        <div class={classes!("flex", "flex-wrap", "gap-2", "mb-4")}>
                            { for addon.tags.iter().map(|tag| html! {
                                <span
                                    key={tag.clone()}
                                    class={classes!(
                                        "px-3", "py-1", "rounded-full",
                                        "bg-brand-purple/10", "text-brand-purple",
                                        "border", "border-brand-purple/20",
                                        "text-sm", "font-semibold"
                                    )}
                                >
                                    { tag }
                                </span>
                            }) }
                        </div>

                        <h1 class={classes!("text-4xl", "font-bold", "text-white", "mb-2")}>
                            { &addon.name }
                        </h1>
                        <p class={classes!("text-gray-500", "mb-6", "font-mono", "text-sm")}>
                            { fill_one(t::VERSION_TEMPLATE, &addon.version) }
                        </p>

                        <div class={classes!("prose", "prose-invert", "max-w-none", "mb-10")}>
                            <p class={classes!("text-gray-300", "leading-8", "text-lg")}>
                                { &addon.full_description }
                            </p>
                        </div>

                        <Button
                            size={ButtonSize::Lg}
                            class={classes!("w-full", "md:w-auto", "gap-2", "shadow-xl", "shadow-brand-purple/20")}
                            onclick={install}
                        >
                            <Icon name={IconName::Download} size={20} />
                            { t::INSTALL }
                        </Button>
                    </div>
                </div>
            </div>
        </div>
    }
}
