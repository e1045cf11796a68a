//! Decorative stand-ins for a clinic's intake form and booking calendar on the
//! demo page. Nothing here leaves the browser.

use yew::prelude::*;

const SERVICES: [(&str, &str); 3] = [
    ("Swedish Massage", "60 min"),
    ("Deep Tissue", "90 min"),
    ("Hot Stone Therapy", "75 min"),
];

const SLOTS: [&str; 6] = ["9:00 AM", "10:30 AM", "12:00 PM", "1:30 PM", "3:00 PM", "4:30 PM"];

#[function_component(MockIntakeForm)]
pub fn mock_intake_form() -> Html {
    let submitted = use_state(|| false);

    let onsubmit = {
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submitted.set(true);
        })
    };

    if *submitted {
        return html! {
            <div class="mock-done">
                <p>{"Thanks! Your therapist will review this before your visit."}</p>
            </div>
        };
    }

    html! {
        <form class="mock-form" {onsubmit}>
            <input type="text" placeholder="Full name" />
            <input type="email" placeholder="Email" />
            <select>
                <option>{"What brings you in?"}</option>
                <option>{"Relaxation"}</option>
                <option>{"Pain relief"}</option>
                <option>{"Injury recovery"}</option>
            </select>
            <textarea placeholder="Anything we should know? (allergies, pressure preference...)" />
            <button type="submit" class="cta-button">{"Submit intake"}</button>
        </form>
    }
}

#[function_component(MockServiceCalendar)]
pub fn mock_service_calendar() -> Html {
    let service = use_state(|| 0usize);
    let slot = use_state(|| None::<usize>);

    html! {
        <div class="mock-calendar">
            <div class="mock-services">
                { for SERVICES.iter().enumerate().map(|(i, (name, length))| {
                    let service = service.clone();
                    let slot = slot.clone();
                    let selected = *service == i;
                    html! {
                        <button
                            class={classes!("mock-service", selected.then(|| "selected"))}
                            onclick={Callback::from(move |_| {
                                service.set(i);
                                slot.set(None);
                            })}
                        >
                            <span>{*name}</span>
                            <span class="muted">{*length}</span>
                        </button>
                    }
                }) }
            </div>
            <div class="mock-slots">
                { for SLOTS.iter().enumerate().map(|(i, time)| {
                    let slot = slot.clone();
                    let selected = *slot == Some(i);
                    html! {
                        <button
                            class={classes!("mock-slot", selected.then(|| "selected"))}
                            onclick={Callback::from(move |_| slot.set(Some(i)))}
                        >
                            {*time}
                        </button>
                    }
                }) }
            </div>
            if let Some(i) = *slot {
                <p class="accent">
                    {format!("{} booked for {} today.", SERVICES[*service].0, SLOTS[i])}
                </p>
            }
        </div>
    }
}
