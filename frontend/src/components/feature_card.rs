use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    /// CSS icon class, e.g. `icon-code`.
    pub icon: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="feature-card hover-lift">
            <div class="feature-icon">
                <i class={classes!("icon", props.icon.to_string())} aria-hidden="true"></i>
            </div>
            <h3>{ props.title.clone() }</h3>
            <p>{ props.description.clone() }</p>
        </div>
    }
}
