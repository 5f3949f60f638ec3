use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SolutionCardProps {
    pub title: AttrValue,
    pub description: AttrValue,
}

#[function_component(SolutionCard)]
pub fn solution_card(props: &SolutionCardProps) -> Html {
    html! {
        <div class="solution-card hover-lift glow-on-hover">
            <h3 class="solution-title">{ props.title.clone() }</h3>
            <p class="solution-description">{ props.description.clone() }</p>
        </div>
    }
}
