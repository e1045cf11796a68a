use funnel::links::demo_slug;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::site_header::SiteHeader;
use crate::Route;

/// Entry point for prospects: type the clinic name, get a personalised demo.
#[function_component]
pub fn Home() -> Html {
    let clinic_name = use_state(String::new);
    let navigator = use_navigator();

    let oninput = {
        let clinic_name = clinic_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            clinic_name.set(input.value());
        })
    };

    let onsubmit = {
        let clinic_name = clinic_name.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name = clinic_name.trim();
            if name.is_empty() {
                return;
            }
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::Demo { slug: demo_slug(name) });
            }
        })
    };

    html! {
        <main class="page">
            <style>
                {r#"
                .home-hero {
                    max-width: 720px;
                    margin: 0 auto;
                    padding: 6rem 1rem;
                    text-align: center;
                }
                .home-hero h1 {
                    font-size: 3rem;
                    line-height: 1.1;
                    margin-bottom: 1rem;
                }
                .home-form {
                    display: flex;
                    gap: 0.75rem;
                    margin-top: 2.5rem;
                }
                .home-form input {
                    flex: 1;
                    background: rgba(0, 0, 0, 0.4);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 10px;
                    padding: 0.9rem 1rem;
                    color: #fff;
                    font-size: 1rem;
                }
                @media (max-width: 640px) {
                    .home-form {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
            <SiteHeader />
            <section class="home-hero">
                <h1>{"See your clinic "}<span class="accent">{"run itself"}</span></h1>
                <p class="muted">
                    {"Enter your clinic's name to preview the booking and intake experience "}
                    {"your clients would get."}
                </p>
                <form class="home-form" {onsubmit}>
                    <input
                        type="text"
                        placeholder="Ex. Tranquil Massage"
                        value={(*clinic_name).clone()}
                        {oninput}
                    />
                    <button type="submit" class="cta-button">{"Show me the demo"}</button>
                </form>
            </section>
        </main>
    }
}
