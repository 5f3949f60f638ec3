use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum CtaVariant {
    Project,
    Course,
}

impl CtaVariant {
    pub fn class(self) -> &'static str {
        match self {
            CtaVariant::Project => "cta-project",
            CtaVariant::Course => "cta-course",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    pub variant: CtaVariant,
    pub to: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Call-to-action link styled as a button. Targets live outside this app, so it's a plain anchor.
#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    html! {
        <a
            href={props.to.clone()}
            class={classes!("cta-button", props.variant.class(), props.class.clone())}
        >
            { for props.children.iter() }
        </a>
    }
}
