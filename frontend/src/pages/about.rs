use stremiolab_shared::{content, Profile, SocialLink, SocialPlatform, View};
use yew::prelude::*;

use crate::{
    components::{
        icons::{Icon, IconName},
        image_with_loading::ImageWithLoading,
    },
    config,
    i18n::current::about as t,
};

fn social_icon(platform: SocialPlatform) -> IconName {
    match platform {
        SocialPlatform::X => IconName::Twitter,
        SocialPlatform::Telegram => IconName::Send,
    }
}

fn social_hover(platform: SocialPlatform) -> &'static str {
    match platform {
        SocialPlatform::X => {
            "hover:text-[#1DA1F2] hover:bg-[#1DA1F2]/10 hover:border-[#1DA1F2]/30"
        },
        SocialPlatform::Telegram => {
            "hover:text-[#0088cc] hover:bg-[#0088cc]/10 hover:border-[#0088cc]/30"
        },
    }
}

fn social_tile(link: &SocialLink) -> Html {
    html! {
        <a
            key={link.url.clone()}
            href={link.url.clone()}
            target="_blank"
            rel="noopener noreferrer"
            aria-label={link.platform.label()}
            class={classes!(
                "p-3", "rounded-xl", "bg-white/5", "text-gray-400",
                "border", "border-white/5",
                "transition-all", "duration-300",
                social_hover(link.platform)
            )}
        >
            <Icon name={social_icon(link.platform)} size={24} />
        </a>
    }
}

fn handle_pill(link: &SocialLink, handle: &str) -> Html {
    html! {
        <a
            key={link.url.clone()}
            href={link.url.clone()}
            target="_blank"
            rel="noopener noreferrer"
            class={classes!(
                "inline-flex", "items-center", "gap-2",
                "text-gray-400", "hover:text-white", "transition-colors", "text-sm",
                "border", "border-gray-800", "px-4", "py-2", "rounded-full",
                "hover:bg-white/5"
            )}
        >
            <Icon name={social_icon(link.platform)} size={16} />
            <span dir="ltr">{ handle.to_string() }</span>
        </a>
    }
}

/// Links with a handle render as a labelled pill, the rest as icon tiles.
fn social_links(profile: &Profile) -> Html {
    html! {
        <div class={classes!("flex", "justify-center", "gap-4")} aria-label={t::SOCIALS_ARIA}>
            { for profile.socials.iter().map(|link| match &link.handle {
                Some(handle) => handle_pill(link, handle),
                None => social_tile(link),
            }) }
        </div>
    }
}

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    let site = use_memo((), |_| content::site_profile());
    let developer = use_memo((), |_| content::developer_profile());

    html! {
        <div
            data-view={View::About.slug()}
            class={classes!(
                "pt-28", "pb-12", "px-4", "min-h-screen",
                "flex", "flex-col", "items-center", "justify-center", "animate-fadeIn"
            )}
        >
            <div class={classes!("max-w-2xl", "w-full", "space-y-8")}>
                // Site identity
                <section class={classes!(
                    "bg-gradient-to-br", "from-[#151515]", "to-black",
                    "border", "border-brand-purple/30", "rounded-3xl",
                    "p-8", "md:p-12", "text-center", "relative", "overflow-hidden", "group",
                    "hover:border-brand-purple/60", "transition-all", "duration-500",
                    "shadow-[0_0_40px_-10px_rgba(108,43,217,0.15)]",
                    "hover:shadow-[0_0_60px_-15px_rgba(108,43,217,0.3)]",
                    "hover:-translate-y-2"
                )}>
                    <div class={classes!(
                        "absolute", "top-0", "left-0", "w-full", "h-1",
                        "bg-gradient-to-r", "from-transparent", "via-brand-purple", "to-transparent",
                        "opacity-50"
                    )}></div>

                    <ImageWithLoading
                        src={config::asset_path(&site.avatar)}
                        alt={site.avatar_alt.clone()}
                        container_class={classes!(
                            "w-24", "h-24", "mx-auto", "rounded-2xl",
                            "border-2", "border-brand-purple",
                            "shadow-[0_0_20px_rgba(108,43,217,0.4)]",
                            "mb-6", "transform", "group-hover:rotate-6",
                            "transition-transform", "duration-500"
                        )}
                        class={classes!("w-full", "h-full", "object-cover")}
                    />

                    <h2 class={classes!("text-3xl", "font-bold", "text-white", "mb-3", "tracking-wide")}>
                        { &site.name }
                    </h2>
                    <p class={classes!("text-brand-purple", "mb-8", "text-lg", "font-bold")}>
                        { &site.role }
                    </p>

                    { social_links(&site) }
                </section>

                // Developer identity
                <section class={classes!(
                    "bg-black", "border", "border-gray-800", "rounded-3xl",
                    "p-8", "text-center", "relative", "overflow-hidden", "group",
                    "hover:border-gray-600", "transition-all", "duration-500",
                    "hover:-translate-y-1", "hover:shadow-lg"
                )}>
                    <div class={classes!(
                        "w-20", "h-20", "mx-auto", "rounded-full",
                        "bg-gradient-to-tr", "from-gray-800", "to-black",
                        "p-1", "mb-4", "animate-glow"
                    )}>
                        <ImageWithLoading
                            src={config::asset_path(&developer.avatar)}
                            alt={developer.avatar_alt.clone()}
                            container_class={classes!("w-full", "h-full", "rounded-full")}
                            class={classes!("w-full", "h-full", "object-cover")}
                        />
                    </div>

                    <h3 class={classes!("text-2xl", "font-bold", "text-white", "mb-1")}>
                        { &developer.name }
                    </h3>
                    <p class={classes!("text-brand-purple", "font-medium", "text-sm", "mb-6")}>
                        { &developer.role }
                    </p>

                    { social_links(&developer) }
                </section>
            </div>
        </div>
    }
}
