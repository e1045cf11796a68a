use funnel::welcome_name;
use funnel::widget::EMBED_SCRIPT_URL;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::site_header::SiteHeader;
use crate::config;

/// Last step: the booking widget, fed the query string this page arrived with.
#[function_component]
pub fn Schedule() -> Html {
    let location = use_location();
    let query = location
        .as_ref()
        .map(|l| l.query_str().to_string())
        .unwrap_or_default();

    let widget = config::booking_widget();
    let src = widget.embed_src(&query);
    let first_name = welcome_name(&query);

    html! {
        <main class="page">
            <style>
                {r#"
                .schedule-body {
                    max-width: 896px;
                    margin: 0 auto;
                    padding: 3rem 1rem;
                }
                .schedule-intro {
                    text-align: center;
                    margin-bottom: 2.5rem;
                }
                .schedule-intro h1 {
                    font-size: 2.75rem;
                    margin-bottom: 1rem;
                }
                .schedule-intro .welcome {
                    display: block;
                    margin-top: 0.5rem;
                    color: #34d399;
                }
                .widget-frame {
                    background: #fff;
                    border-radius: 12px;
                    overflow: hidden;
                    min-height: 700px;
                }
                .widget-frame iframe {
                    width: 100%;
                    border: none;
                    height: 100vh;
                    min-height: 800px;
                }
                "#}
            </style>
            <SiteHeader />
            <div class="schedule-body">
                <div class="schedule-intro">
                    <h1>{"You're One Step Away"}</h1>
                    <p class="muted">
                        {"Select a time below to finalize your clinic's automation setup."}
                        if let Some(name) = first_name {
                            <span class="welcome">{format!("Welcome, {}!", name)}</span>
                        }
                    </p>
                </div>
                <div class="widget-frame">
                    <iframe src={src} scrolling="yes" id={widget.element_id()}></iframe>
                    <script src={EMBED_SCRIPT_URL} type="text/javascript"></script>
                </div>
            </div>
        </main>
    }
}
