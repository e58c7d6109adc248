use stremiolab_shared::View;
use yew::prelude::*;

use crate::{
    components::{
        button::{Button, ButtonSize, ButtonVariant},
        icons::{Icon, IconName},
    },
    hooks::{parallax_offset, use_scroll_y},
    i18n::current::home as t,
};

/// Hero calls to action: label, destination, style, icon.
pub const CTAS: [(&str, View, ButtonVariant, IconName); 2] = [
    (t::CTA_ADDONS, View::Addons, ButtonVariant::Primary, IconName::Tv),
    (t::CTA_TUTORIALS, View::Tutorials, ButtonVariant::Outline, IconName::BookOpen),
];

pub fn cta_handler(view: View, on_navigate: &Callback<View>) -> Callback<()> {
    on_navigate.reform(move |_: ()| view)
}

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub on_navigate: Callback<View>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let scroll_y = use_scroll_y();

    let calls_to_action = CTAS.iter().map(|(label, view, variant, icon)| {
        let onclick = cta_handler(*view, &props.on_navigate).reform(|_: MouseEvent| ());
        html! {
            <Button
                variant={*variant}
                size={ButtonSize::Lg}
                class={classes!("w-full", "sm:w-auto", "gap-2")}
                {onclick}
            >
                <Icon name={*icon} size={20} />
                { *label }
            </Button>
        }
    });

    let glow_layer = classes!(
        "absolute",
        "rounded-full",
        "will-change-transform",
        "transition-transform",
        "duration-75",
        "ease-out"
    );

    html! {
        <div
            data-view={View::Home.slug()}
            class={classes!(
                "relative", "min-h-screen",
                "flex", "flex-col", "items-center", "justify-center",
                "overflow-hidden", "animate-fadeIn"
            )}
        >
            // Parallax backdrop
            <div
                class={classes!(
                    glow_layer.clone(),
                    "top-0", "left-1/4", "w-96", "h-96",
                    "bg-brand-purple/30", "blur-[128px]", "opacity-40"
                )}
                style={parallax_offset(scroll_y, 0.4)}
            ></div>
            <div
                class={classes!(
                    glow_layer.clone(),
                    "bottom-0", "right-1/4", "w-96", "h-96",
                    "bg-blue-900/20", "blur-[128px]", "opacity-30"
                )}
                style={parallax_offset(scroll_y, -0.2)}
            ></div>
            <div
                class={classes!(
                    glow_layer,
                    "top-1/3", "right-10", "w-64", "h-64",
                    "bg-brand-purple/10", "blur-[100px]", "opacity-20"
                )}
                style={parallax_offset(scroll_y, 0.1)}
            ></div>

            <div class={classes!(
                "relative", "z-10", "text-center", "px-4",
                "max-w-4xl", "mx-auto", "mt-20", "md:mt-0"
            )}>
                <div class={classes!(
                    "inline-block", "mb-6", "px-4", "py-1.5", "rounded-full",
                    "border", "border-brand-purple/50", "bg-brand-purple/10",
                    "backdrop-blur-sm", "animate-float"
                )}>
                    <span class={classes!("text-brand-purple", "font-semibold", "text-sm", "tracking-wide")}>
                        { t::BADGE }
                    </span>
                </div>

                <h1 class={classes!(
                    "text-5xl", "md:text-7xl", "font-extrabold", "text-white",
                    "mb-6", "leading-tight", "tracking-tight", "drop-shadow-2xl"
                )}>
                    { t::TITLE_BEFORE }
                    <span class={classes!(
                        "text-transparent", "bg-clip-text",
                        "bg-gradient-to-r", "from-brand-purple", "to-purple-400"
                    )}>
                        { t::TITLE_HIGHLIGHT }
                    </span>
                    { t::TITLE_AFTER }
                </h1>

                <p class={classes!(
                    "text-lg", "md:text-2xl", "text-gray-400", "mb-10",
                    "max-w-2xl", "mx-auto", "leading-relaxed"
                )}>
                    { t::INTRO }
                </p>

                <div class={classes!(
                    "flex", "flex-col", "sm:flex-row", "gap-4",
                    "justify-center", "items-center"
                )}>
                    { for calls_to_action }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::tests::recorder;

    #[test]
    fn ctas_lead_to_addons_then_tutorials() {
        let (on_navigate, visited) = recorder::<View>();
        for (_, view, _, _) in CTAS {
            cta_handler(view, &on_navigate).emit(());
        }
        assert_eq!(*visited.borrow(), vec![View::Addons, View::Tutorials]);
    }

    #[test]
    fn browse_addons_label_targets_addons() {
        let (label, view, variant, _) = CTAS[0];
        assert_eq!(label, "تصفح الإضافات");
        assert_eq!(view, View::Addons);
        assert_eq!(variant, ButtonVariant::Primary);
    }

    #[function_component(HomeHarness)]
    fn home_harness() -> Html {
        html! { <HomePage on_navigate={Callback::from(|_: View| ())} /> }
    }

    #[tokio::test]
    async fn renders_ctas_in_table_order() {
        let rendered = yew::ServerRenderer::<HomeHarness>::new()
            .hydratable(false)
            .render()
            .await;
        let addons_at = rendered.find(t::CTA_ADDONS).unwrap();
        let tutorials_at = rendered.rfind(t::CTA_TUTORIALS).unwrap();
        assert!(addons_at < tutorials_at, "{rendered}");
    }
}
