use funnel::links::{clinic_from_slug, onboard_href};
use yew::prelude::*;

use crate::components::engagement_modal::EngagementModal;
use crate::components::mock_widgets::{MockIntakeForm, MockServiceCalendar};

#[derive(Properties, PartialEq)]
pub struct DemoProps {
    pub slug: String,
}

/// Personalised preview of what a clinic's clients would see, with the
/// engagement prompt mounted on top.
#[function_component]
pub fn Demo(props: &DemoProps) -> Html {
    let clinic_name = clinic_from_slug(&props.slug);
    let onboard = onboard_href(&clinic_name);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <main class="page demo-page">
            <style>
                {r#"
                .demo-page {
                    background: linear-gradient(to bottom, #0a1612, #0d1f1a, #0B0E14);
                }
                .demo-banner {
                    position: sticky;
                    top: 0;
                    z-index: 40;
                    background: rgba(6, 78, 59, 0.9);
                    border-bottom: 1px solid rgba(16, 185, 129, 0.3);
                    padding: 0.75rem 1rem;
                }
                .demo-banner-inner {
                    max-width: 1152px;
                    margin: 0 auto;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    align-items: center;
                    justify-content: space-between;
                    font-size: 0.9rem;
                }
                .demo-banner a.exit {
                    color: #a7f3d0;
                    margin-right: 1rem;
                    text-decoration: none;
                }
                .demo-hero {
                    text-align: center;
                    padding: 3rem 1rem 2rem;
                }
                .demo-hero h1 {
                    font-size: 3.5rem;
                    margin: 0 0 1rem;
                    color: #d1fae5;
                }
                .demo-grid {
                    max-width: 1152px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }
                .demo-card {
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 16px;
                    padding: 1.5rem;
                }
                .mock-form, .mock-calendar {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .mock-form input, .mock-form select, .mock-form textarea {
                    background: rgba(0, 0, 0, 0.4);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 8px;
                    padding: 0.7rem;
                    color: #fff;
                }
                .mock-services, .mock-slots {
                    display: grid;
                    gap: 0.5rem;
                }
                .mock-slots {
                    grid-template-columns: repeat(3, 1fr);
                }
                .mock-service, .mock-slot {
                    display: flex;
                    justify-content: space-between;
                    background: rgba(0, 0, 0, 0.3);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 8px;
                    padding: 0.7rem;
                    color: #fff;
                    cursor: pointer;
                }
                .mock-service.selected, .mock-slot.selected {
                    border-color: #10b981;
                    background: rgba(16, 185, 129, 0.15);
                }
                .demo-footer {
                    text-align: center;
                    padding: 4rem 1rem;
                }
                @media (max-width: 768px) {
                    .demo-grid {
                        grid-template-columns: 1fr;
                    }
                    .demo-hero h1 {
                        font-size: 2.5rem;
                    }
                }
                "#}
            </style>
            <div class="demo-banner">
                <div class="demo-banner-inner">
                    <span>{"Preview for "}<strong>{&clinic_name}</strong></span>
                    <div>
                        <a class="exit" href={onboard.clone()}>{"Exit Preview"}</a>
                        <a class="cta-button" href={onboard.clone()}>
                            {"Get This for My Clinic →"}
                        </a>
                    </div>
                </div>
            </div>

            <section class="demo-hero">
                <h1>{&clinic_name}</h1>
                <p class="muted">
                    {"Where tranquility meets technology. Book your perfect escape in seconds."}
                </p>
            </section>

            <div class="demo-grid">
                <div class="demo-card">
                    <h3>{"New Client Intake"}</h3>
                    <p class="muted">
                        {"Tell us about yourself so we can personalize your experience."}
                    </p>
                    <MockIntakeForm />
                </div>
                <div class="demo-card">
                    <h3>{"Book Your Session"}</h3>
                    <p class="muted">
                        {"Choose a time that works best for your schedule."}
                    </p>
                    <MockServiceCalendar />
                </div>
            </div>

            <div class="demo-footer">
                <p class="muted">{"Ready to bring this experience to your clients?"}</p>
                <a class="cta-button" href={onboard}>{"Automate My Clinic →"}</a>
            </div>

            <EngagementModal clinic_name={Some(AttrValue::from(clinic_name.clone()))} />
        </main>
    }
}
