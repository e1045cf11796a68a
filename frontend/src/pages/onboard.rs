use std::rc::Rc;

use funnel::{header_label, LeadField, LeadForm};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::site_header::SiteHeader;
use crate::config;

enum FormAction {
    Update(LeadField, String),
    Seed(Option<String>),
}

#[derive(Default, PartialEq)]
struct FormState {
    form: LeadForm,
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = self.form.clone();
        match action {
            FormAction::Update(field, value) => form.update_field(field, value),
            FormAction::Seed(inbound) => {
                form.seed_clinic_name(inbound.as_deref());
            }
        }
        if form == self.form {
            self
        } else {
            Rc::new(FormState { form })
        }
    }
}

#[function_component]
pub fn Onboard() -> Html {
    let inbound = use_search_param("clinicName".to_string());
    let state = use_reducer(FormState::default);
    let error = use_state(|| None::<String>);

    // The link's clinicName can land after first render; LeadForm only takes it once.
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |inbound: &Option<String>| {
                dispatcher.dispatch(FormAction::Seed(inbound.clone()));
                || ()
            },
            inbound.clone(),
        );
    }

    let label = header_label(inbound.as_deref()).to_string();
    {
        use_effect_with_deps(
            move |label: &String| {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    document.set_title(&format!("{} | Book Your Onboarding", label));
                }
                || ()
            },
            label.clone(),
        );
    }

    let oninput = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(field) = LeadField::from_id(&input.id()) {
                dispatcher.dispatch(FormAction::Update(field, input.value()));
            }
        })
    };

    let onsubmit = {
        let state = state.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match state.form.submit(&config::handoff_options()) {
                Ok(handoff) => {
                    error.set(None);
                    if let Some(window) = web_sys::window() {
                        if let Err(e) = window.location().set_href(&handoff.target) {
                            log::error!("Navigation to scheduling failed: {:?}", e);
                        }
                    }
                }
                Err(e) => {
                    log::info!("Onboarding form incomplete");
                    error.set(Some(e.to_string()));
                }
            }
        })
    };

    let field_input = |field: LeadField| {
        html! {
            <div class="form-field">
                <label for={field.id()}>{field.label()}</label>
                <input
                    id={field.id()}
                    name={field.id()}
                    type={field.input_type()}
                    required={true}
                    value={state.form.value(field).to_string()}
                    placeholder={field.placeholder()}
                    oninput={oninput.clone()}
                />
            </div>
        }
    };

    html! {
        <main class="page">
            <style>
                {r#"
                .onboard-grid {
                    max-width: 1152px;
                    margin: 0 auto;
                    padding: 4rem 1rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: start;
                }
                .onboard-pitch h1 {
                    font-size: 3.5rem;
                    line-height: 1.1;
                    margin: 0 0 1rem;
                }
                .onboard-point {
                    margin-top: 1.5rem;
                }
                .onboard-point h3 {
                    margin: 0 0 0.25rem;
                }
                .onboard-card {
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 24px;
                    padding: 2rem;
                }
                .onboard-card form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .name-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .form-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .form-field label {
                    font-size: 0.875rem;
                    color: #d1d5db;
                }
                .form-field input {
                    background: rgba(0, 0, 0, 0.4);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 8px;
                    padding: 0.75rem 1rem;
                    color: #fff;
                    font-size: 1rem;
                }
                .form-field input:focus {
                    outline: none;
                    box-shadow: 0 0 0 2px rgba(16, 185, 129, 0.5);
                }
                .form-error {
                    color: #f87171;
                    background: rgba(248, 113, 113, 0.1);
                    border-radius: 8px;
                    padding: 0.75rem 1rem;
                }
                .form-fineprint {
                    font-size: 0.75rem;
                    text-align: center;
                }
                @media (max-width: 768px) {
                    .onboard-grid {
                        grid-template-columns: 1fr;
                        gap: 2rem;
                        padding: 2rem 1rem;
                    }
                    .onboard-pitch h1 {
                        font-size: 2.5rem;
                    }
                }
                "#}
            </style>
            <SiteHeader label={label.clone()} />
            <div class="onboard-grid">
                <div class="onboard-pitch">
                    <h1>
                        {"Ready to "}<span class="accent">{"Automate"}</span>{" Your Clinic?"}
                    </h1>
                    <p class="muted">
                        {"Join the top 1% of clinics using AI to book appointments 24/7. "}
                        {"Setup takes less than 24 hours."}
                    </p>
                    <div class="onboard-point">
                        <h3>{"Instant setup"}</h3>
                        <p class="muted">
                            {"We handle the technical integration with your existing tools."}
                        </p>
                    </div>
                    <div class="onboard-point">
                        <h3>{"Risk-Free Pilot"}</h3>
                        <p class="muted">
                            {"Try it for 30 days. If you don't save 10+ hours, you don't pay."}
                        </p>
                    </div>
                </div>

                <div class="onboard-card">
                    <h2>{"Secure Your Spot"}</h2>
                    <p class="muted">
                        {"Fill out the form below to schedule your technical onboarding."}
                    </p>
                    // novalidate: LeadForm::submit is the only check; required/type stay as hints
                    <form novalidate={true} {onsubmit}>
                        <div class="name-row">
                            { field_input(LeadField::FirstName) }
                            { field_input(LeadField::LastName) }
                        </div>
                        { field_input(LeadField::ClinicName) }
                        { field_input(LeadField::Email) }
                        { field_input(LeadField::Phone) }
                        if let Some(message) = (*error).as_ref() {
                            <div class="form-error" role="alert">{message}</div>
                        }
                        <button type="submit" class="cta-button">
                            {"Book Onboarding Call →"}
                        </button>
                        <p class="muted form-fineprint">
                            {"By clicking above, you agree to our Terms. Your data is secure."}
                        </p>
                    </form>
                </div>
            </div>
        </main>
    }
}
