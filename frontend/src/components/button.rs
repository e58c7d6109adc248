use yew::prelude::*;

const BASE_CLASSES: &str = "inline-flex items-center justify-center font-bold rounded-xl \
                            transition-all duration-300 focus:outline-none \
                            disabled:opacity-50 disabled:cursor-not-allowed";

/// Visual style of a [`Button`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "completes the button palette; no page uses it yet")
    )]
    Ghost,
}

impl ButtonVariant {
    pub fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-brand-purple hover:bg-[#5b21b6] text-white \
                 shadow-[0_0_15px_rgba(108,43,217,0.4)] \
                 hover:shadow-[0_0_25px_rgba(108,43,217,0.6)] border border-brand-purple"
            },
            ButtonVariant::Secondary => "bg-white text-black hover:bg-gray-200 border border-white",
            ButtonVariant::Outline => {
                "bg-transparent border-2 border-brand-purple text-brand-purple \
                 hover:bg-brand-purple/10"
            },
            ButtonVariant::Ghost => "bg-transparent text-gray-400 hover:text-white hover:bg-white/5",
        }
    }
}

/// Padding and type scale of a [`Button`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn classes(self) -> &'static str {
        match self {
            ButtonSize::Sm => "px-4 py-2 text-sm",
            ButtonSize::Md => "px-6 py-3 text-base",
            ButtonSize::Lg => "px-8 py-4 text-lg",
        }
    }
}

/// Base, variant, size, then caller classes. The two axes are independent.
pub fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: Classes) -> Classes {
    classes!(BASE_CLASSES, variant.classes(), size.classes(), extra)
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let ButtonProps {
        variant,
        size,
        class,
        onclick,
        disabled,
        button_type,
        children,
    } = props;

    html! {
        <button
            type={button_type.clone()}
            class={button_classes(*variant, *size, class.clone())}
            onclick={onclick.clone()}
            disabled={*disabled}
        >
            { children.clone() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARIANTS: [ButtonVariant; 4] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
    ];
    const SIZES: [ButtonSize; 3] = [ButtonSize::Sm, ButtonSize::Md, ButtonSize::Lg];

    #[test]
    fn defaults_are_primary_md() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonSize::default(), ButtonSize::Md);
    }

    #[test]
    fn every_combination_concatenates_both_axes() {
        for variant in VARIANTS {
            for size in SIZES {
                let rendered = button_classes(variant, size, classes!("w-full")).to_string();
                assert!(rendered.starts_with("inline-flex"), "{rendered}");
                assert!(rendered.contains(variant.classes().split_whitespace().next().unwrap()));
                assert!(rendered.contains(size.classes()), "{rendered}");
                assert!(rendered.ends_with("w-full"), "{rendered}");
            }
        }
    }

    #[test]
    fn variant_and_size_tables_are_distinct() {
        let variants: std::collections::HashSet<_> = VARIANTS.iter().map(|v| v.classes()).collect();
        let sizes: std::collections::HashSet<_> = SIZES.iter().map(|s| s.classes()).collect();
        assert_eq!(variants.len(), 4);
        assert_eq!(sizes.len(), 3);
    }

    #[function_component(Pair)]
    fn pair() -> Html {
        html! {
            <>
                <Button variant={ButtonVariant::Ghost} size={ButtonSize::Sm} button_type="submit">
                    { "go" }
                </Button>
                <Button disabled=true>{ "stop" }</Button>
            </>
        }
    }

    #[tokio::test]
    async fn forwards_type_and_disabled() {
        let rendered = yew::ServerRenderer::<Pair>::new().hydratable(false).render().await;
        let (submit, stop) = rendered.split_once("</button>").unwrap();

        assert!(submit.contains(r#"type="submit""#), "{rendered}");
        assert!(submit.contains(">go"), "{rendered}");
        assert!(!submit.contains(r#"disabled="disabled""#), "{submit}");
        assert!(stop.contains(r#"type="button""#), "{stop}");
        assert!(stop.contains(r#"disabled="disabled""#), "{stop}");
    }
}
