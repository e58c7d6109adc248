use stremiolab_shared::{MobileMenu, View};
use yew::prelude::*;

use crate::{
    components::{
        icons::{Icon, IconName},
        image_with_loading::ImageWithLoading,
    },
    config,
    i18n::current::navbar as t,
};

pub fn nav_label(view: View) -> &'static str {
    match view {
        View::Home => t::NAV_HOME,
        View::Addons => t::NAV_ADDONS,
        View::Tutorials => t::NAV_TUTORIALS,
        View::About => t::NAV_ABOUT,
    }
}

fn nav_icon(view: View) -> IconName {
    match view {
        View::Home => IconName::Zap,
        View::Addons => IconName::Tv,
        View::Tutorials => IconName::BookOpen,
        View::About => IconName::Users,
    }
}

/// One tap in the mobile overlay: the menu collapses and the view switches.
pub fn mobile_pick(
    menu: MobileMenu,
    view: View,
    set_menu: &Callback<MobileMenu>,
    on_navigate: &Callback<View>,
) {
    let mut next = menu;
    let target = next.select(view);
    set_menu.emit(next);
    on_navigate.emit(target);
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub current: View,
    pub on_navigate: Callback<View>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let NavbarProps {
        current,
        on_navigate,
    } = props;
    let menu = use_state(MobileMenu::default);

    let toggle_mobile_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *menu;
            next.toggle();
            menu.set(next);
        })
    };

    let set_menu = {
        let menu = menu.clone();
        Callback::from(move |next: MobileMenu| menu.set(next))
    };

    let go_home = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(View::Home))
    };

    let desktop_items = View::ALL.iter().map(|view| {
        let view = *view;
        let active = view == *current;
        let onclick = {
            let on_navigate = on_navigate.clone();
            Callback::from(move |_: MouseEvent| on_navigate.emit(view))
        };
        let item_classes = classes!(
            "flex",
            "items-center",
            "gap-2",
            "px-4",
            "py-2",
            "rounded-lg",
            "transition-all",
            "duration-300",
            if active {
                "text-brand-purple bg-brand-purple/10 font-bold \
                 shadow-[0_0_10px_rgba(108,43,217,0.2)]"
            } else {
                "text-gray-400 hover:text-white hover:bg-white/5"
            }
        );
        html! {
            <button
                type="button"
                key={view.slug()}
                class={item_classes}
                data-nav={view.slug()}
                aria-current={active.then_some("page")}
                {onclick}
            >
                <Icon name={nav_icon(view)} size={18} />
                <span>{ nav_label(view) }</span>
            </button>
        }
    });

    let mobile_items = View::ALL.iter().map(|view| {
        let view = *view;
        let active = view == *current;
        let onclick = {
            let menu = menu.clone();
            let set_menu = set_menu.clone();
            let on_navigate = on_navigate.clone();
            Callback::from(move |_: MouseEvent| mobile_pick(*menu, view, &set_menu, &on_navigate))
        };
        let item_classes = classes!(
            "flex",
            "items-center",
            "gap-3",
            "w-full",
            "text-right",
            "px-4",
            "py-4",
            "rounded-md",
            "text-base",
            "font-medium",
            if active {
                "text-brand-purple bg-brand-purple/10 border-r-4 border-brand-purple"
            } else {
                "text-gray-300 hover:text-white hover:bg-white/5"
            }
        );
        html! {
            <button
                type="button"
                key={view.slug()}
                class={item_classes}
                aria-current={active.then_some("page")}
                {onclick}
            >
                <Icon name={nav_icon(view)} size={18} />
                <span>{ nav_label(view) }</span>
            </button>
        }
    });

    let menu_open = menu.is_open();

    html! {
        <nav class={classes!(
            "fixed", "top-0", "w-full", "z-50",
            "bg-brand-dark/80", "backdrop-blur-md",
            "border-b", "border-white/10"
        )}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8")}>
                <div class={classes!("flex", "items-center", "justify-between", "h-20")}>
                    // Brand
                    <div
                        class={classes!("flex", "items-center", "gap-2", "cursor-pointer", "group")}
                        onclick={go_home}
                    >
                        <ImageWithLoading
                            src={config::asset_path("images/logoS.jpg")}
                            alt={t::LOGO_ALT}
                            loading={AttrValue::from("eager")}
                            container_class={classes!(
                                "w-10", "h-10", "rounded-xl",
                                "border", "border-brand-purple",
                                "shadow-[0_0_15px_rgba(108,43,217,0.5)]",
                                "group-hover:shadow-[0_0_25px_rgba(108,43,217,0.8)]",
                                "transition-all"
                            )}
                            class={classes!("w-full", "h-full", "object-cover")}
                        />
                        <span class={classes!(
                            "text-2xl", "font-bold",
                            "bg-clip-text", "text-transparent",
                            "bg-gradient-to-r", "from-white", "to-gray-400"
                        )}>
                            { config::APP_NAME }
                        </span>
                    </div>

                    // Desktop menu
                    <div
                        class={classes!("hidden", "md:flex", "items-center", "gap-1")}
                        role="group"
                        aria-label={t::NAV_MAIN_ARIA}
                    >
                        { for desktop_items }
                    </div>

                    // Mobile toggle
                    <div class="md:hidden">
                        <button
                            type="button"
                            class={classes!("text-gray-300", "hover:text-white", "focus:outline-none")}
                            aria-label={if menu_open { t::CLOSE_MENU_ARIA } else { t::OPEN_MENU_ARIA }}
                            aria-expanded={menu_open.to_string()}
                            onclick={toggle_mobile_menu}
                        >
                            <Icon name={if menu_open { IconName::X } else { IconName::Menu }} size={28} />
                        </button>
                    </div>
                </div>
            </div>

            // Mobile overlay
            if menu_open {
                <div
                    class={classes!(
                        "md:hidden", "bg-brand-dark",
                        "border-b", "border-white/10",
                        "absolute", "w-full", "animate-fadeIn"
                    )}
                    role="group"
                    aria-label={t::MOBILE_NAV_ARIA}
                >
                    <div class={classes!("px-2", "pt-2", "pb-3", "space-y-1", "sm:px-3")}>
                        { for mobile_items }
                    </div>
                </div>
            }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::tests::recorder;

    #[test]
    fn mobile_pick_closes_menu_and_navigates_in_one_call() {
        let (set_menu, menus) = recorder::<MobileMenu>();
        let (on_navigate, visited) = recorder::<View>();
        let mut open = MobileMenu::default();
        open.toggle();

        mobile_pick(open, View::About, &set_menu, &on_navigate);

        assert_eq!(menus.borrow().len(), 1);
        assert!(!menus.borrow()[0].is_open());
        assert_eq!(*visited.borrow(), vec![View::About]);
    }

    #[test]
    fn mobile_pick_forwards_every_destination() {
        let (set_menu, _) = recorder::<MobileMenu>();
        let (on_navigate, visited) = recorder::<View>();
        for view in View::ALL {
            let mut open = MobileMenu::default();
            open.toggle();
            mobile_pick(open, view, &set_menu, &on_navigate);
        }
        assert_eq!(*visited.borrow(), View::ALL.to_vec());
    }

    #[tokio::test]
    async fn desktop_list_is_a_labelled_group() {
        let rendered = yew::ServerRenderer::<Navbar>::with_props(|| NavbarProps {
            current: View::Home,
            on_navigate: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await;
        let label = format!(r#"aria-label="{}""#, t::NAV_MAIN_ARIA);
        let (before, after) = rendered.split_once(&label).unwrap();
        let opening = format!(
            "{}{label}{}",
            &before[before.rfind("<div").unwrap()..],
            &after[..after.find('>').unwrap()],
        );
        assert!(opening.contains(r#"role="group""#), "{opening}");
    }

    #[test]
    fn labels_follow_navbar_order() {
        let labels: Vec<_> = View::ALL.into_iter().map(nav_label).collect();
        assert_eq!(labels, vec!["الرئيسية", "الإضافات", "الشروحات", "من نحن"]);
    }
}
