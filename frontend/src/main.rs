use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod components {
    pub mod animated_counter;
    pub mod in_view;
    pub mod navigation;
    pub mod notification;
    pub mod typewriter;
}
mod pages {
    pub mod faq;
    pub mod join_waitlist;
    pub mod landing;
}

use components::navigation::Navigation;
use pages::{join_waitlist::JoinWaitlist, landing::Landing};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/joinwaitlist")]
    JoinWaitlist,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::JoinWaitlist => {
            info!("Rendering Join Waitlist page");
            html! { <JoinWaitlist /> }
        }
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home} classes="hero-cta">{"Back to Home"}</Link<Route>>
                </div>
            }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Navigation />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
