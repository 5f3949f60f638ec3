use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub centered: bool,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class={classes!("section-header", props.centered.then(|| "centered"))}>
            <h2>{ props.title.clone() }</h2>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! { <p class="section-subtitle">{ subtitle.clone() }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
