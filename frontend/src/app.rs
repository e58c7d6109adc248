use stremiolab_shared::View;
use yew::prelude::*;

use crate::{
    components::{footer::Footer, navbar::Navbar},
    hooks::use_scroll_to_top,
    navigation_context::NavigationState,
    pages, seo,
};

/// Total dispatch from the active view to its page. Only home can navigate.
pub fn switch(view: View, on_navigate: Callback<View>) -> Html {
    match view {
        View::Home => html! { <pages::HomePage {on_navigate} /> },
        View::Addons => html! { <pages::AddonsPage /> },
        View::Tutorials => html! { <pages::TutorialsPage /> },
        View::About => html! { <pages::AboutPage /> },
    }
}

#[derive(Properties, PartialEq, Default)]
pub struct AppShellProps {
    #[prop_or_default]
    pub initial_view: View,
}

#[function_component(AppShell)]
pub fn app_shell(props: &AppShellProps) -> Html {
    let initial_view = props.initial_view;
    let navigation = use_reducer_eq(move || NavigationState::starting_at(initial_view));
    let current = navigation.current();

    let on_navigate = {
        let navigation = navigation.clone();
        Callback::from(move |view: View| navigation.dispatch(view))
    };

    use_scroll_to_top(current);
    use_effect_with(current, |view| {
        seo::apply_view_meta(*view);
        || ()
    });

    html! {
        <div class={classes!(
            "min-h-screen", "bg-black", "text-white", "font-sans",
            "selection:bg-brand-purple", "selection:text-white",
            "flex", "flex-col"
        )}>
            <Navbar current={current} on_navigate={on_navigate.clone()} />
            <main class="flex-grow">
                { switch(current, on_navigate) }
            </main>
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use yew::ServerRenderer;

    use super::*;

    async fn render_at(view: View) -> String {
        ServerRenderer::<AppShell>::with_props(move || AppShellProps {
            initial_view: view,
        })
        .hydratable(false)
        .render()
        .await
    }

    /// The opening-tag-plus-body chunk of the single navbar entry marked
    /// `aria-current="page"`.
    fn highlighted_entry(rendered: &str) -> &str {
        let entries: Vec<_> = rendered
            .split("<button")
            .filter(|chunk| chunk.contains(r#"aria-current="page""#))
            .collect();
        assert_eq!(entries.len(), 1, "{rendered}");
        entries[0]
    }

    #[tokio::test]
    async fn default_shell_mounts_only_home() {
        let rendered = ServerRenderer::<AppShell>::new().hydratable(false).render().await;
        assert_eq!(rendered.matches("data-view=").count(), 1, "{rendered}");
        assert!(rendered.contains(r#"data-view="home""#));
        assert!(highlighted_entry(&rendered).contains(r#"data-nav="home""#));
    }

    #[tokio::test]
    async fn every_view_mounts_exactly_its_page_and_highlight() {
        for view in View::ALL {
            let rendered = render_at(view).await;
            let marker = format!(r#"data-view="{}""#, view.slug());
            assert_eq!(rendered.matches("data-view=").count(), 1, "{view}: {rendered}");
            assert!(rendered.contains(&marker), "{view}: {rendered}");

            let nav_marker = format!(r#"data-nav="{}""#, view.slug());
            assert!(highlighted_entry(&rendered).contains(&nav_marker), "{view}");
        }
    }

    #[tokio::test]
    async fn mobile_overlay_starts_closed() {
        let rendered = render_at(View::Home).await;
        assert!(rendered.contains(r#"aria-expanded="false""#));
        assert!(!rendered.contains(crate::i18n::current::navbar::MOBILE_NAV_ARIA));
    }

    #[tokio::test]
    async fn home_offers_both_calls_to_action() {
        let rendered = render_at(View::Home).await;
        assert!(rendered.contains("تصفح الإضافات"));
        assert!(rendered.contains("translateY(0px)"));
    }

    #[tokio::test]
    async fn pages_show_their_fixtures() {
        let addons = render_at(View::Addons).await;
        assert!(addons.contains("Torrentio"));
        assert!(addons.contains("الإصدار 1.0.0"));

        let tutorials = render_at(View::Tutorials).await;
        assert!(tutorials.contains(r#"datetime="2025-12-14""#));

        let about = render_at(View::About).await;
        for url in ["https://x.com/stremiolabar", "https://t.me/StremioLabAR", "https://x.com/i0zzw"] {
            assert!(about.contains(&format!(r#"href="{url}""#)), "{url}");
        }
        assert_eq!(about.matches(r#"target="_blank""#).count(), 3);
        assert!(about.contains("@i0zzw"));
    }
}
