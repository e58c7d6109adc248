use yew::prelude::*;

/// Lucide line icons used across the site.
/// SVG path data from <https://lucide.dev>
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconName {
    // Navigation
    Zap,
    Tv,
    BookOpen,
    Users,

    // Actions
    Menu,
    X,
    Download,

    // Social
    Send,
    Twitter,
}

impl IconName {
    /// SVG path data, sub-paths joined into a single `d` attribute.
    pub fn path(&self) -> &'static str {
        match self {
            IconName::Zap => "M13 2 3 14h9l-1 8 10-12h-9l1-8z",
            IconName::Tv => {
                "M4 7h16a2 2 0 0 1 2 2v11a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2zM17 2l-5 \
                 5-5-5"
            },
            IconName::BookOpen => {
                "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2zM22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"
            },
            IconName::Users => {
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M9 3a4 4 0 1 0 0 8 4 4 0 0 0 0-8zM22 \
                 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75"
            },

            IconName::Menu => "M4 12h16M4 6h16M4 18h16",
            IconName::X => "M18 6 6 18M6 6l12 12",
            IconName::Download => "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4M7 10l5 5 5-5M12 15V3",

            IconName::Send => "m22 2-7 20-4-9-9-4zM22 2 11 13",
            IconName::Twitter => {
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 \
                 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: IconName,

    #[prop_or(24)]
    pub size: u32,

    #[prop_or_else(|| "currentColor".to_string())]
    pub color: String,

    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let IconProps {
        name,
        size,
        color,
        class,
    } = props;

    let stroke_width = if *size <= 16 { 2.5 } else { 2.0 };

    html! {
        <svg
            class={classes!("inline-block", "shrink-0", class.clone())}
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke={color.clone()}
            stroke-width={stroke_width.to_string()}
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path d={name.path()} />
        </svg>
    }
}
