use std::rc::Rc;

use log::debug;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::BackgroundConfig;
use crate::gradient::renderer::render;
use crate::scroll::hook::use_scroll_position;

#[derive(Properties, PartialEq)]
pub struct ScrollBackgroundProps {
    pub config: Rc<BackgroundConfig>,
    #[prop_or_default]
    pub class: Classes,
}

/// Full-viewport decorative layer whose gradient drifts with scroll position.
#[function_component(ScrollBackground)]
pub fn scroll_background(props: &ScrollBackgroundProps) -> Html {
    let surface = use_node_ref();
    let progress = use_scroll_position().progress;

    {
        let surface = surface.clone();
        let config = props.config.clone();
        use_effect_with_deps(
            move |progress| {
                // Not mounted yet; the next scroll will paint it.
                if let Some(surface) = surface.cast::<HtmlElement>() {
                    let style = render(*progress, &config);
                    let declaration = surface.style();
                    let _ = declaration.set_property("background", &style.to_css());
                    let _ = declaration.set_property("transition", &config.transition.to_css());
                    debug!("Background at {:.3}, angle {:.1}", progress.value(), style.angle);
                }
                || ()
            },
            progress,
        );
    }

    html! {
        <div
            ref={surface}
            class={classes!("scroll-background", props.class.clone())}
            style="position: fixed; inset: 0; pointer-events: none; z-index: 0;"
            aria-hidden="true"
        />
    }
}
