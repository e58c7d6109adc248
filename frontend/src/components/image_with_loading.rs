use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageState {
    Loading,
    Loaded,
    Failed,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ImageWithLoadingProps {
    pub src: String,
    pub alt: String,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub container_class: Classes,
    #[prop_or_default]
    pub loading: Option<AttrValue>,
}

/// Image with a pulsing placeholder while loading and a lettered tile when
/// the source cannot be fetched.
#[function_component(ImageWithLoading)]
pub fn image_with_loading(props: &ImageWithLoadingProps) -> Html {
    let state = use_state(|| ImageState::Loading);

    {
        // a new source starts over
        let state = state.clone();
        use_effect_with(props.src.clone(), move |_| {
            state.set(ImageState::Loading);
            || ()
        });
    }

    let on_image_load = {
        let state = state.clone();
        Callback::from(move |_: Event| state.set(ImageState::Loaded))
    };
    let on_image_error = {
        let state = state.clone();
        Callback::from(move |_: Event| state.set(ImageState::Failed))
    };

    let container_classes = classes!(
        props.container_class.clone(),
        "relative",
        "overflow-hidden",
        if *state == ImageState::Loaded { "" } else { "bg-brand-card" }
    );

    let image_classes = classes!(
        props.class.clone(),
        "transition-opacity",
        "duration-500",
        match *state {
            ImageState::Loaded => "opacity-100",
            ImageState::Loading => "opacity-0",
            ImageState::Failed => "hidden",
        }
    );

    let overlay = match *state {
        ImageState::Loading => html! {
            <div class={classes!(
                "absolute",
                "inset-0",
                "bg-gradient-to-br",
                "from-white/5",
                "to-transparent",
                "animate-pulse",
                "pointer-events-none"
            )} />
        },
        ImageState::Failed => html! {
            <div
                class={classes!(
                    "absolute",
                    "inset-0",
                    "flex",
                    "items-center",
                    "justify-center",
                    "text-3xl",
                    "font-bold",
                    "text-brand-purple"
                )}
                role="img"
                aria-label={props.alt.clone()}
            >
                { fallback_initial(&props.alt) }
            </div>
        },
        ImageState::Loaded => html! {},
    };

    html! {
        <div class={container_classes}>
            { overlay }
            <img
                src={props.src.clone()}
                alt={props.alt.clone()}
                class={image_classes}
                loading={props.loading.clone().unwrap_or(AttrValue::from("lazy"))}
                onload={on_image_load}
                onerror={on_image_error}
            />
        </div>
    }
}

fn fallback_initial(alt: &str) -> String {
    alt.chars()
        .find(|c| c.is_alphanumeric())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

#[cfg(test)]
mod tests {
    use super::fallback_initial;

    #[test]
    fn fallback_uses_first_letter() {
        assert_eq!(fallback_initial("StremioLabAR Logo"), "S");
        assert_eq!(fallback_initial("  yasser"), "Y");
        assert_eq!(fallback_initial(""), "?");
    }
}
