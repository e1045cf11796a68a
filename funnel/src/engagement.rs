//! When to pop the "automate your clinic" prompt.
//!
//! Two detectors race: a one-shot timer and an exit-intent pointer listener.
//! The first one to fire shows the prompt; after that both are released and the
//! prompt can only be dismissed. Nothing re-arms within the same mount.

use tracing::{debug, info};

pub const PROMPT_DELAY_MS: u32 = 20_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PromptPhase {
    #[default]
    Hidden,
    Visible,
    /// Terminal for the mount.
    Dismissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptSignal {
    DelayElapsed,
    /// Pointer left the document; `client_y` is where it crossed.
    PointerLeft { client_y: i32 },
}

impl PromptSignal {
    /// Leaving through the sides or bottom is not exit intent, only the top edge is.
    pub fn qualifies(&self) -> bool {
        match self {
            PromptSignal::DelayElapsed => true,
            PromptSignal::PointerLeft { client_y } => *client_y <= 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissAction {
    CloseButton,
    Backdrop,
    PrimaryCta,
    SecondaryCta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Shown(PromptSignal),
    Dismissed(DismissAction),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngagementPrompt {
    phase: PromptPhase,
}

impl EngagementPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> PromptPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase == PromptPhase::Visible
    }

    /// Detectors only have work to do while the prompt has never been shown.
    pub fn detectors_wanted(&self) -> bool {
        self.phase == PromptPhase::Hidden
    }

    pub fn signal(&mut self, signal: PromptSignal) -> Option<Transition> {
        if self.phase != PromptPhase::Hidden || !signal.qualifies() {
            return None;
        }
        self.phase = PromptPhase::Visible;
        info!(?signal, "engagement prompt shown");
        Some(Transition::Shown(signal))
    }

    pub fn dismiss(&mut self, action: DismissAction) -> Option<Transition> {
        if self.phase != PromptPhase::Visible {
            return None;
        }
        self.phase = PromptPhase::Dismissed;
        debug!(?action, "engagement prompt dismissed");
        Some(Transition::Dismissed(action))
    }
}

/// Owns the platform detector resources (timer handle, event subscription) as a
/// single guard `G`. Releasing means dropping the guard; the guard's own `Drop`
/// cancels the timer and unsubscribes. Dropping `Detectors` releases too, so a
/// teardown path can never leave a callback behind.
#[derive(Debug)]
pub struct Detectors<G> {
    guard: Option<G>,
    armed_once: bool,
}

impl<G> Default for Detectors<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> Detectors<G> {
    pub fn new() -> Self {
        Self {
            guard: None,
            armed_once: false,
        }
    }

    /// Arms once per instance, and only while `prompt` is still hidden. `make` is
    /// not called otherwise.
    pub fn arm(&mut self, prompt: &EngagementPrompt, make: impl FnOnce() -> G) -> bool {
        if self.armed_once || !prompt.detectors_wanted() {
            return false;
        }
        self.guard = Some(make());
        self.armed_once = true;
        debug!("engagement detectors armed");
        true
    }

    /// Releases the guard if `prompt` has left the hidden phase. Returns true when
    /// this call released it.
    pub fn sync(&mut self, prompt: &EngagementPrompt) -> bool {
        if prompt.detectors_wanted() {
            return false;
        }
        self.release()
    }

    pub fn release(&mut self) -> bool {
        match self.guard.take() {
            Some(guard) => {
                drop(guard);
                debug!("engagement detectors released");
                true
            }
            None => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.guard.is_some()
    }
}

impl<G> Drop for Detectors<G> {
    fn drop(&mut self) {
        self.release();
    }
}
