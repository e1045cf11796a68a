//! Lead handoff pipeline shared by the SPA and the server.
//!
//! Everything in here is platform independent: the frontend drives it from
//! browser events, the backend drives it from a posted form.

pub mod engagement;
pub mod error;
pub mod lead;
pub mod links;
pub mod payload;
pub mod phone;
pub mod widget;

pub use engagement::{
    Detectors, DismissAction, EngagementPrompt, PromptPhase, PromptSignal, Transition,
    PROMPT_DELAY_MS,
};
pub use error::LeadError;
pub use lead::{header_label, Handoff, LeadField, LeadForm, ValidLead, DEFAULT_BRAND};
pub use payload::{welcome_name, HandoffOptions, OutboundLeadPayload, PayloadKey};
pub use phone::normalize_phone;
pub use widget::BookingWidget;
