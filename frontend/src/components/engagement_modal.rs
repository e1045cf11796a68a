use std::rc::Rc;

use funnel::links::onboard_href;
use funnel::{Detectors, DismissAction, EngagementPrompt, PromptSignal, PROMPT_DELAY_MS};
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, MouseEvent};
use yew::prelude::*;

/// A listener on `document` that unsubscribes itself when dropped.
struct DocumentListener {
    document: Document,
    event: &'static str,
    callback: Closure<dyn FnMut(MouseEvent)>,
}

impl DocumentListener {
    fn new(
        document: Document,
        event: &'static str,
        handler: impl FnMut(MouseEvent) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
        let listener = callback.as_ref().unchecked_ref();
        match document.add_event_listener_with_callback(event, listener) {
            Ok(()) => Some(Self { document, event, callback }),
            Err(e) => {
                log::warn!("Could not listen for {}: {:?}", event, e);
                None
            }
        }
    }
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        let listener = self.callback.as_ref().unchecked_ref();
        let _ = self.document.remove_event_listener_with_callback(self.event, listener);
    }
}

/// Both detectors for one mount. Dropping the `Timeout` cancels it.
struct ArmedDetectors {
    _timeout: Timeout,
    _exit_intent: Option<DocumentListener>,
}

fn arm_detectors(signals: UseReducerDispatcher<PromptState>) -> ArmedDetectors {
    let timer_signals = signals.clone();
    let timeout = Timeout::new(PROMPT_DELAY_MS, move || {
        timer_signals.dispatch(PromptAction::Signal(PromptSignal::DelayElapsed));
    });

    let exit_intent = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|document| {
            DocumentListener::new(document, "mouseleave", move |e: MouseEvent| {
                let signal = PromptSignal::PointerLeft {
                    client_y: e.client_y(),
                };
                signals.dispatch(PromptAction::Signal(signal));
            })
        });

    ArmedDetectors {
        _timeout: timeout,
        _exit_intent: exit_intent,
    }
}

#[derive(Default, PartialEq)]
struct PromptState(EngagementPrompt);

enum PromptAction {
    Signal(PromptSignal),
    Dismiss(DismissAction),
}

impl Reducible for PromptState {
    type Action = PromptAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut prompt = self.0;
        let changed = match action {
            PromptAction::Signal(signal) => prompt.signal(signal),
            PromptAction::Dismiss(action) => prompt.dismiss(action),
        };
        match changed {
            Some(_) => Rc::new(PromptState(prompt)),
            None => self,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct EngagementModalProps {
    /// Carried into the onboarding link when the visitor takes the offer.
    #[prop_or_default]
    pub clinic_name: Option<AttrValue>,
}

/// "Ready to automate your clinic?" prompt. Shows once per mount, after
/// `PROMPT_DELAY_MS` or when the pointer leaves through the top of the page,
/// whichever comes first.
#[function_component(EngagementModal)]
pub fn engagement_modal(props: &EngagementModalProps) -> Html {
    let state = use_reducer(PromptState::default);
    let detectors = use_mut_ref(Detectors::<ArmedDetectors>::new);

    // Arm on mount; the destructor is the unmount path.
    {
        let detectors = detectors.clone();
        let dispatcher = state.dispatcher();
        let prompt = state.0;
        use_effect_with_deps(
            move |_| {
                detectors.borrow_mut().arm(&prompt, || arm_detectors(dispatcher));
                move || {
                    detectors.borrow_mut().release();
                }
            },
            (),
        );
    }

    // First transition out of hidden drops both detectors.
    {
        let detectors = detectors.clone();
        use_effect_with_deps(
            move |prompt: &EngagementPrompt| {
                detectors.borrow_mut().sync(prompt);
                || ()
            },
            state.0,
        );
    }

    if !state.0.is_visible() {
        return html! {};
    }

    let dismiss = |action: DismissAction| {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(PromptAction::Dismiss(action)))
    };

    let take_offer = {
        let dispatcher = state.dispatcher();
        let href = match &props.clinic_name {
            Some(name) => onboard_href(name),
            None => "/onboard".to_string(),
        };
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(PromptAction::Dismiss(DismissAction::PrimaryCta));
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(&href) {
                    log::error!("Navigation to onboarding failed: {:?}", e);
                }
            }
        })
    };

    html! {
        <>
            <style>
                {r#"
                .prompt-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(4px);
                    z-index: 50;
                }
                .prompt-frame {
                    position: fixed;
                    left: 50%;
                    top: 50%;
                    transform: translate(-50%, -50%);
                    width: 100%;
                    max-width: 28rem;
                    padding: 1rem;
                    box-sizing: border-box;
                    z-index: 51;
                }
                .prompt-card {
                    position: relative;
                    border-radius: 14px;
                    padding: 2rem 1.5rem 1.5rem;
                    background: rgba(11, 14, 20, 0.95);
                    border: 2px solid #10b981;
                    box-shadow: 0 16px 32px rgba(0, 0, 0, 0.4);
                    text-align: center;
                }
                .prompt-card h2 {
                    font-size: 1.5rem;
                    color: #34d399;
                    margin: 0 0 1rem;
                }
                .prompt-close {
                    position: absolute;
                    right: 1rem;
                    top: 1rem;
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 1.25rem;
                    cursor: pointer;
                }
                .prompt-actions {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                }
                .prompt-secondary {
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.6);
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .prompt-secondary:hover {
                    color: #fff;
                }
                "#}
            </style>
            <div class="prompt-overlay" onclick={dismiss(DismissAction::Backdrop)}></div>
            <div class="prompt-frame">
                <div class="prompt-card">
                    <button
                        class="prompt-close"
                        aria-label="Close"
                        onclick={dismiss(DismissAction::CloseButton)}
                    >
                        {"×"}
                    </button>
                    <h2>{"Ready to automate your clinic?"}</h2>
                    <p class="muted">
                        {"This entire demo, plus customized patient experience upgrades and "}
                        {"follow-ups can be running for your business in less than a week."}
                    </p>
                    <div class="prompt-actions">
                        <button class="cta-button" onclick={take_offer}>
                            {"I want this for my clinic!"}
                        </button>
                        <button
                            class="prompt-secondary"
                            onclick={dismiss(DismissAction::SecondaryCta)}
                        >
                            {"I need to know more"}
                        </button>
                    </div>
                </div>
            </div>
        </>
    }
}
