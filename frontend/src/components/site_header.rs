use funnel::DEFAULT_BRAND;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    #[prop_or(AttrValue::Static(DEFAULT_BRAND))]
    pub label: AttrValue,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    html! {
        <header class="site-header">
            <style>
                {r#"
                .site-header {
                    max-width: 1152px;
                    margin: 0 auto;
                    padding: 1.5rem 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }
                .site-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    color: #fff;
                    text-decoration: none;
                }
                "#}
            </style>
            <Link<Route> to={Route::Home} classes="site-logo">
                {props.label.clone()}
            </Link<Route>>
        </header>
    }
}
