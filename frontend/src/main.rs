use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod scroll {
    pub mod metrics;
    pub mod tracker;
    pub mod hook;
}
mod gradient {
    pub mod color;
    pub mod palette;
    pub mod renderer;
}
mod components {
    pub mod scroll_background;
    pub mod cta_button;
    pub mod feature_card;
    pub mod section_header;
    pub mod solution_card;
    pub mod nav;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use config::BackgroundConfig;
use components::{nav::Nav, scroll_background::ScrollBackground};
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub background: Rc<BackgroundConfig>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <BrowserRouter>
            <ScrollBackground config={props.background.clone()} />
            <Nav />
            <main class="site-content">
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let background = config::load();

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps {
        background: Rc::new(background),
    })
    .render();
}
