use yew::prelude::*;
use yew_router::prelude::*;

use crate::scroll::hook::use_scroll_position;
use crate::Route;

/// Past this offset the header switches to its compact, opaque look.
const SCROLLED_THRESHOLD: f64 = 600.0;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scroll_position().position > SCROLLED_THRESHOLD;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Bravonest"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="/learn" class="nav-link" onclick={close_menu.clone()}>
                        {"Learn"}
                    </a>
                    <a href="/contact" class="nav-link" onclick={close_menu.clone()}>
                        {"Contact"}
                    </a>
                    <a href="/contact#project-call" class="nav-cta" onclick={close_menu}>
                        {"Book a Call"}
                    </a>
                </div>
            </div>
        </nav>
    }
}
