use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod api;
mod reveal {
    pub mod tracker;
    pub mod dom;
    pub mod hook;
}
mod sections {
    pub mod navigation;
    pub mod hero;
    pub mod courses;
    pub mod why_utkloud;
    pub mod our_section;
    pub mod contact;
    pub mod footer;
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
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(err) = console_log::init_with_level(Level::Info) {
        gloo_console::error!(format!("error initializing log: {}", err));
    }

    info!("Starting UT-Kloud site");
    yew::Renderer::<App>::new().render();
}
