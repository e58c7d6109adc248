use stremiolab_shared::{content, Tutorial, View};
use yew::prelude::*;

use crate::{
    components::{
        button::{Button, ButtonSize, ButtonVariant},
        icons::{Icon, IconName},
    },
    i18n::current::tutorials as t,
    utils::{default_opener, open_link},
};

pub fn watch_handler(tutorial: &Tutorial, opener: &Callback<String>) -> Callback<()> {
    open_link(&tutorial.tutorial_url, opener)
}

#[derive(Properties, PartialEq)]
pub struct TutorialsPageProps {
    #[prop_or_else(default_opener)]
    pub opener: Callback<String>,
}

#[function_component(TutorialsPage)]
pub fn tutorials_page(props: &TutorialsPageProps) -> Html {
    let tutorial = use_memo((), |_| content::featured_tutorial());

    let watch = watch_handler(&tutorial, &props.opener).reform(|_: MouseEvent| ());

    html! {
        <div
            data-view={View::Tutorials.slug()}
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

            <article class={classes!(
                "bg-[#121212]", "hover:bg-[#1a1a1a]",
                "border", "border-white/5", "hover:border-brand-purple/40",
                "rounded-2xl", "p-8", "transition-all", "duration-300", "group",
                "hover:shadow-[0_0_20px_-5px_rgba(108,43,217,0.2)]"
            )}>
                <div class={classes!("flex", "items-center", "gap-3", "mb-4")}>
                    <div class={classes!(
                        "w-3", "h-3", "rounded-full", "bg-brand-purple",
                        "shadow-[0_0_8px_#6C2BD9]"
                    )}></div>
                    <h3 class={classes!(
                        "text-2xl", "font-bold", "text-white",
                        "group-hover:text-brand-purple", "transition-colors"
                    )}>
                        { &tutorial.title }
                    </h3>
                </div>
                <p class={classes!("text-gray-400", "leading-relaxed", "text-lg", "mb-6")}>
                    { &tutorial.description }
                </p>
                <div class={classes!("flex", "justify-between", "items-center")}>
                    <time
                        class={classes!("text-sm", "text-gray-600", "font-mono")}
                        datetime={tutorial.date.clone()}
                    >
                        { &tutorial.date }
                    </time>
                    <Button
                        variant={ButtonVariant::Secondary}
                        size={ButtonSize::Sm}
                        class={classes!("gap-2")}
                        onclick={watch}
                    >
                        <span>{ t::WATCH }</span>
                        <Icon name={IconName::BookOpen} size={16} />
                    </Button>
                </div>
            </article>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::tests::recorder;

    #[test]
    fn watch_opens_exactly_the_tutorial_link() {
        let (opener, opened) = recorder::<String>();
        watch_handler(&content::featured_tutorial(), &opener).emit(());
        assert_eq!(
            *opened.borrow(),
            vec!["https://x.com/stremiolabar/status/1986897162308100370?s=46".to_string()]
        );
    }
}
