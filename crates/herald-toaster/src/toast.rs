use std::time::{Duration, Instant};

use herald_bridge::notification::{Presentation, ToastId, Tone};

/// A notification owned by the toast stack.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    tone: Tone,
    presentation: Presentation,
    /// When the toast became visible. Queued toasts have not started aging.
    shown_at: Option<Instant>,
    /// How long the toast stays visible; `None` means until dismissed.
    timeout: Option<Duration>,
}

impl Toast {
    pub fn new(tone: Tone, presentation: Presentation, timeout: Option<Duration>) -> Self {
        Self {
            id: ToastId::next(),
            tone,
            presentation,
            shown_at: None,
            timeout,
        }
    }

    pub fn id(&self) -> ToastId {
        self.id
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn is_visible(&self) -> bool {
        self.shown_at.is_some()
    }

    /// Starts the display clock. Calling it again keeps the first timestamp.
    pub(crate) fn mark_shown(&mut self, now: Instant) {
        self.shown_at.get_or_insert(now);
    }

    /// Time left before the toast expires, if it is visible and has a timeout.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let shown_at = self.shown_at?;
        let timeout = self.timeout?;
        Some(timeout.saturating_sub(now.saturating_duration_since(shown_at)))
    }

    /// Returns whether the toast has been visible for its whole timeout.
    pub fn is_expired(&self, now: Instant) -> bool {
        self.remaining(now).is_some_and(|left| left.is_zero())
    }
}
