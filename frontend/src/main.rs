use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod pages {
    pub mod home;
    pub mod demo;
    pub mod onboard;
    pub mod schedule;
}
mod components {
    pub mod engagement_modal;
    pub mod mock_widgets;
    pub mod site_header;
}

use pages::{
    home::Home,
    demo::Demo,
    onboard::Onboard,
    schedule::Schedule,
};
use components::site_header::SiteHeader;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/demo/:slug")]
    Demo { slug: String },
    #[at("/onboard")]
    Onboard,
    #[at("/schedule")]
    Schedule,
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
        Route::Demo { slug } => {
            info!("Rendering Demo page");
            html! { <Demo slug={slug} /> }
        },
        Route::Onboard => {
            info!("Rendering Onboard page");
            html! { <Onboard /> }
        },
        Route::Schedule => {
            info!("Rendering Schedule page");
            html! { <Schedule /> }
        },
        Route::NotFound => {
            html! {
                <main class="page">
                    <SiteHeader />
                    <div class="not-found">
                        <h1>{"Page not found"}</h1>
                        <Link<Route> to={Route::Home}>{"Back to the start"}</Link<Route>>
                    </div>
                </main>
            }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>
                {r#"
                body {
                    margin: 0;
                    background: #0B0E14;
                    color: #fff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto,
                        Helvetica, Arial, sans-serif;
                }
                .page {
                    min-height: 100vh;
                }
                .muted {
                    color: rgba(255, 255, 255, 0.6);
                }
                .accent {
                    color: #34d399;
                }
                .cta-button {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    background: #059669;
                    color: #fff;
                    border: none;
                    border-radius: 10px;
                    padding: 0.9rem 1.5rem;
                    font-weight: 600;
                    font-size: 1rem;
                    text-decoration: none;
                    cursor: pointer;
                }
                .cta-button:hover {
                    background: #047857;
                }
                .not-found {
                    text-align: center;
                    padding: 6rem 1rem;
                }
                .not-found a {
                    color: #34d399;
                }
                "#}
            </style>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");
    // funnel reports through tracing
    tracing_wasm::set_as_global_default();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
