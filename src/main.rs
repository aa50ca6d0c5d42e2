use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod dom;
mod hooks;
mod media;
mod scroll;
mod components {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod icons;
    pub mod marquee;
    pub mod portfolio;
    pub mod process;
    pub mod services;
    pub mod showcase;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

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
        // Anchor-only site, stray paths land on the same page
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::warn_1(&format!("logger unavailable: {}", err).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
