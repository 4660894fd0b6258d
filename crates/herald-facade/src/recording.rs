use std::sync::{Arc, Mutex, MutexGuard};

use herald_bridge::notification::{Presentation, Tone};

use crate::provider::NotificationProvider;

/// One call received by a [`RecordingProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub tone: Tone,
    pub presentation: Presentation,
}

/// A provider that renders nothing and remembers every call in order.
///
/// Clones share the same log, so a test can keep one handle while a
/// [`crate::Notifier`] owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingProvider {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl RecordingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all calls received so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().clone()
    }

    /// Returns how many calls went to the given path.
    pub fn count(&self, tone: Tone) -> usize {
        self.lock().iter().filter(|call| call.tone == tone).count()
    }

    fn record(&self, tone: Tone, presentation: Presentation) {
        self.lock().push(RecordedCall { tone, presentation });
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RecordedCall>> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl NotificationProvider for RecordingProvider {
    fn show(&self, presentation: Presentation) {
        self.record(Tone::Neutral, presentation);
    }

    fn show_error(&self, presentation: Presentation) {
        self.record(Tone::Error, presentation);
    }
}
